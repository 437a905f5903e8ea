//! Conversions between row models and transfer objects.
//!
//! Every mapped field is copied one-to-one. The only fallible direction is
//! `Course -> CourseDto`, where a stored category code must name a
//! [`CourseType`] variant.

use cms_core::error::CoreError;
use cms_db::models::course::Course;
use cms_db::models::student::Student;

use crate::dto::{CourseDto, CourseType, StudentDto};

impl TryFrom<Course> for CourseDto {
    type Error = CoreError;

    fn try_from(course: Course) -> Result<Self, Self::Error> {
        Ok(Self {
            course_id: course.id,
            course_name: course.name,
            course_duration: course.duration,
            course_type: CourseType::try_from(course.course_type)?,
        })
    }
}

impl From<CourseDto> for Course {
    fn from(dto: CourseDto) -> Self {
        Self {
            id: dto.course_id,
            name: dto.course_name,
            duration: dto.course_duration,
            course_type: dto.course_type.code(),
        }
    }
}

impl From<Student> for StudentDto {
    fn from(student: Student) -> Self {
        Self {
            student_id: student.id,
            first_name: student.first_name,
            last_name: student.last_name,
            phone_number: student.phone_number,
            address: student.address,
        }
    }
}

/// The course reference is left at `0`; callers attach the owning course
/// with [`Student::enrol_in`] before persisting.
impl From<StudentDto> for Student {
    fn from(dto: StudentDto) -> Self {
        Self {
            id: dto.student_id,
            course_id: 0,
            first_name: dto.first_name,
            last_name: dto.last_name,
            phone_number: dto.phone_number,
            address: dto.address,
        }
    }
}

/// Map a list of courses, failing on the first unmappable row.
pub fn courses_to_dtos(courses: Vec<Course>) -> Result<Vec<CourseDto>, CoreError> {
    courses.into_iter().map(CourseDto::try_from).collect()
}

pub fn students_to_dtos(students: Vec<Student>) -> Vec<StudentDto> {
    students.into_iter().map(StudentDto::from).collect()
}
