//! Enrollment terms sub-client.

use crate::client::Canvas;
use crate::domain::enrollment_term::EnrollmentTerm;
use crate::http::Method;
use crate::pagination::PaginatedList;
use crate::shared::Params;

/// Root key of the terms envelope: `{"enrollment_terms": [...]}`.
pub const TERMS_ROOT: &str = "enrollment_terms";

pub struct EnrollmentTerms<'a> {
    pub(crate) client: &'a Canvas,
}

impl<'a> EnrollmentTerms<'a> {
    /// `GET /api/v1/accounts/:account_id/terms`. Each term is stamped with
    /// `account_id`.
    pub fn list(&self, account_id: u64, params: Params) -> PaginatedList<EnrollmentTerm> {
        self.client
            .paginate(Method::Get, format!("accounts/{}/terms", account_id))
            .params(params)
            .root(TERMS_ROOT)
            .extra_attribute("account_id", account_id)
    }
}
