pub mod course;
pub mod student;

use cms_core::error::CoreError;
use cms_core::types::DbId;
use cms_db::repositories::CmsRepository;

use crate::error::AppResult;

/// Fail with `NotFound` unless course `id` exists.
pub(crate) async fn ensure_course_exists(repo: &dyn CmsRepository, id: DbId) -> AppResult<()> {
    if repo.course_exists(id).await? {
        Ok(())
    } else {
        Err(CoreError::NotFound {
            entity: "Course",
            id,
        }
        .into())
    }
}
