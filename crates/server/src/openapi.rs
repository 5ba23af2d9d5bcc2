use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct CompanyInputDoc { pub name: Option<String>, pub description: Option<String> }

#[derive(ToSchema)]
pub struct CompanySummaryDoc { pub code: String, pub name: String }

#[derive(ToSchema)]
pub struct CompaniesBodyDoc { pub companies: Vec<CompanySummaryDoc> }

#[derive(ToSchema)]
pub struct CompanyDetailDoc {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub invoices: Vec<i32>,
}

#[derive(ToSchema)]
pub struct CompanyDetailBodyDoc { pub company: CompanyDetailDoc }

#[derive(ToSchema)]
pub struct CompanyRecordDoc { pub code: String, pub name: String, pub description: String }

#[derive(ToSchema)]
pub struct CompanyRecordBodyDoc { pub company: CompanyRecordDoc }

#[derive(ToSchema)]
pub struct StatusBodyDoc { pub status: String }

#[derive(ToSchema)]
pub struct ErrorDoc { pub status: u16, pub message: String, pub detail: Option<String> }

#[derive(ToSchema)]
pub struct ErrorBodyDoc { pub error: ErrorDoc }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::companies::list,
        crate::routes::companies::get,
        crate::routes::companies::create,
        crate::routes::companies::update,
        crate::routes::companies::delete,
    ),
    components(
        schemas(
            HealthResponse,
            CompanyInputDoc,
            CompanySummaryDoc,
            CompaniesBodyDoc,
            CompanyDetailDoc,
            CompanyDetailBodyDoc,
            CompanyRecordDoc,
            CompanyRecordBodyDoc,
            StatusBodyDoc,
            ErrorDoc,
            ErrorBodyDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "companies")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_company_routes() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        assert!(paths.iter().any(|p| p.as_str() == "/companies"));
        assert!(paths.iter().any(|p| p.as_str() == "/companies/{code}"));
        assert!(paths.iter().any(|p| p.as_str() == "/health"));
    }
}
