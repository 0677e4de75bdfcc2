//! Users sub-client.

use crate::client::Canvas;
use crate::domain::user::User;
use crate::error::SdkError;
use crate::http::Method;
use crate::pagination::PaginatedList;
use crate::shared::Params;

pub struct Users<'a> {
    pub(crate) client: &'a Canvas,
}

impl<'a> Users<'a> {
    /// `GET /api/v1/users/:id`.
    pub async fn get(&self, user_id: u64) -> Result<User, SdkError> {
        let path = format!("users/{}", user_id);
        self.client.get_one(&path, Params::new()).await
    }

    /// `GET /api/v1/accounts/:account_id/users`.
    pub fn list(&self, account_id: u64, params: Params) -> PaginatedList<User> {
        self.client
            .paginate(Method::Get, format!("accounts/{}/users", account_id))
            .params(params)
    }

    /// `GET /api/v1/courses/:course_id/users`. Each user is stamped with
    /// `course_id`.
    pub fn list_in_course(&self, course_id: u64, params: Params) -> PaginatedList<User> {
        self.client
            .paginate(Method::Get, format!("courses/{}/users", course_id))
            .params(params)
            .extra_attribute("course_id", course_id)
    }

    /// Search by name or login, `GET /api/v1/accounts/:account_id/users?search_term=`.
    pub fn search(&self, account_id: u64, term: &str) -> PaginatedList<User> {
        self.list(account_id, Params::new().insert("search_term", term))
    }
}
