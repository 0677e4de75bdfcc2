//! Courses sub-client.

use crate::client::Canvas;
use crate::domain::course::Course;
use crate::error::SdkError;
use crate::http::Method;
use crate::pagination::PaginatedList;
use crate::shared::Params;

pub struct Courses<'a> {
    pub(crate) client: &'a Canvas,
}

impl<'a> Courses<'a> {
    /// `GET /api/v1/courses/:id`.
    pub async fn get(&self, course_id: u64, params: Params) -> Result<Course, SdkError> {
        let path = format!("courses/{}", course_id);
        self.client.get_one(&path, params).await
    }

    /// Look up a course by SIS id, `GET /api/v1/courses/sis_course_id:<id>`.
    pub async fn get_by_sis_id(&self, sis_id: &str, params: Params) -> Result<Course, SdkError> {
        let path = format!("courses/sis_course_id:{}", urlencoding::encode(sis_id));
        self.client.get_one(&path, params).await
    }

    /// Courses of the current user, `GET /api/v1/courses`.
    pub fn list(&self, params: Params) -> PaginatedList<Course> {
        self.client.paginate(Method::Get, "courses").params(params)
    }

    /// `GET /api/v1/accounts/:account_id/courses`.
    pub fn list_for_account(&self, account_id: u64, params: Params) -> PaginatedList<Course> {
        self.client
            .paginate(Method::Get, format!("accounts/{}/courses", account_id))
            .params(params)
    }
}
