/// All database primary keys are PostgreSQL SERIAL.
pub type DbId = i32;

/// Course category code as stored in the `courses.course_type` SMALLINT column.
pub type CourseTypeId = i16;
