use actix_web::{HttpResponse, web};
use serde::Serialize;
use strum::IntoEnumIterator;
use tracing::{debug, instrument, warn};
use utoipa::ToSchema;

use crate::calc::{self, SST_RATE};
use crate::error::PayrollError;
use crate::model::salary::{ContributionType, SalaryInput, SalaryResult};

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SchemeResponse {
    #[schema(example = "SSF")]
    pub contribution_type: ContributionType,
    #[schema(example = 0.11)]
    pub employee_rate: f64,
    #[schema(example = 0.20)]
    pub employer_rate: f64,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SchemeListResponse {
    pub data: Vec<SchemeResponse>,
    #[schema(example = "PF")]
    pub default_scheme: ContributionType,
    #[schema(example = 0.01)]
    pub sst_rate: f64,
}

/// Salary breakdown for one employee and period
#[utoipa::path(
    post,
    path = "/salary/calculate",
    request_body = SalaryInput,
    responses(
        (status = 200, description = "Salary calculated", body = SalaryResult),
        (status = 400, description = "Malformed body or invalid input", body = Object, example = json!({
            "error": "invalid totalDays: must be greater than zero"
        })),
        (status = 429, description = "Too many requests")
    ),
    tag = "Salary"
)]
#[instrument(
    name = "salary_calculate",
    skip(payload),
    fields(
        scheme = %payload.contribution_type,
        total_days = payload.total_days,
        days_present = payload.days_present
    )
)]
pub async fn calculate_salary(
    payload: web::Json<SalaryInput>,
) -> Result<HttpResponse, PayrollError> {
    let input = payload.into_inner();

    if input.days_present > input.total_days {
        warn!("Days present exceeds total working days");
    }

    let result = calc::calculate(&input).inspect_err(|e| {
        warn!(error = %e, "Rejected salary input");
    })?;

    debug!(final_payable = result.final_payable, "Salary calculated");

    Ok(HttpResponse::Ok().json(result))
}

/// Contribution schemes and their rates
#[utoipa::path(
    get,
    path = "/salary/schemes",
    responses(
        (status = 200, body = SchemeListResponse)
    ),
    tag = "Salary"
)]
pub async fn list_schemes() -> HttpResponse {
    let data = ContributionType::iter()
        .map(|scheme| {
            let (employee_rate, employer_rate) = scheme.rates();
            SchemeResponse {
                contribution_type: scheme,
                employee_rate,
                employer_rate,
            }
        })
        .collect();

    HttpResponse::Ok().json(SchemeListResponse {
        data,
        default_scheme: ContributionType::default(),
        sst_rate: SST_RATE,
    })
}
