use crate::api::salary::{SchemeListResponse, SchemeResponse};
use crate::model::salary::{ContributionType, SalaryInput, SalaryResult};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Salary Calculator API",
        version = "1.0.0",
        description = r#"
## Salary Calculator

Stateless payroll calculation for a single employee and pay period.

### Formula
- **Split** gross salary into basic and allowance by percentage
- **Pro-rate** both by days present over total working days
- **Contribution** on earned basic: `PF` 10% / 10%, `SSF` 11% / 20% (employee / employer)
- **SST** flat 1% of the taxable base
- **Accessories** (lunch, petrol, dress, other) added after net salary

Every monetary field in the response is rounded to one decimal place.
Unknown or missing `contributionType` values are treated as `PF`.
"#,
    ),
    paths(
        crate::api::salary::calculate_salary,
        crate::api::salary::list_schemes,
        crate::api::health::health
    ),
    components(
        schemas(
            ContributionType,
            SalaryInput,
            SalaryResult,
            SchemeResponse,
            SchemeListResponse
        )
    ),
    tags(
        (name = "Salary", description = "Salary calculation APIs"),
        (name = "Health", description = "Service health"),
    )
)]
pub struct ApiDoc;
