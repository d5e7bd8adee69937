use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use strum_macros::{Display, EnumIter, EnumString};
use utoipa::ToSchema;

use crate::calc::rounding::round1;
use crate::error::PayrollError;

/// Statutory contribution scheme applied to the earned basic salary.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    ToSchema,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(from = "Option<Value>")]
#[allow(clippy::upper_case_acronyms)]
pub enum ContributionType {
    /// Provident Fund, 10% employee / 10% employer.
    #[default]
    PF,
    /// Social Security Fund, 11% employee / 20% employer.
    SSF,
}

impl ContributionType {
    /// `(employee, employer)` contribution fractions.
    pub fn rates(self) -> (f64, f64) {
        match self {
            ContributionType::PF => (0.10, 0.10),
            ContributionType::SSF => (0.11, 0.20),
        }
    }
}

// Only an exact "SSF" selects SSF; any other JSON value falls through to PF.
impl From<Option<Value>> for ContributionType {
    fn from(raw: Option<Value>) -> Self {
        match raw {
            Some(Value::String(s)) => s.parse().unwrap_or_default(),
            _ => ContributionType::default(),
        }
    }
}

/// Missing and `null` amounts both count as zero.
fn null_as_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(
    example = json!({
        "totalSalary": 70000,
        "totalDays": 30,
        "daysPresent": 28,
        "basicPercent": 70,
        "allowancePercent": 30,
        "contributionType": "SSF",
        "lunchPerDay": 100,
        "companyWorkingDays": 26
    })
)]
pub struct SalaryInput {
    #[schema(example = 70000.0)]
    pub total_salary: f64,

    #[schema(example = 30.0)]
    pub total_days: f64,

    #[schema(example = 28.0)]
    pub days_present: f64,

    #[schema(example = 70.0)]
    pub basic_percent: f64,

    #[schema(example = 30.0)]
    pub allowance_percent: f64,

    #[serde(default)]
    #[schema(example = "PF")]
    pub contribution_type: ContributionType,

    #[serde(default, deserialize_with = "null_as_zero")]
    #[schema(example = 100.0, nullable)]
    pub lunch_per_day: f64,

    #[serde(default, deserialize_with = "null_as_zero")]
    #[schema(example = 26.0, nullable)]
    pub company_working_days: f64,

    #[serde(default, deserialize_with = "null_as_zero")]
    #[schema(nullable)]
    pub petrol: f64,

    #[serde(default, deserialize_with = "null_as_zero")]
    #[schema(nullable)]
    pub dress: f64,

    #[serde(default, deserialize_with = "null_as_zero")]
    #[schema(nullable)]
    pub other_accessory: f64,
}

impl SalaryInput {
    /// PF input with no accessory allowances.
    #[cfg(test)]
    pub fn new(
        total_salary: f64,
        total_days: f64,
        days_present: f64,
        basic_percent: f64,
        allowance_percent: f64,
    ) -> Self {
        Self {
            total_salary,
            total_days,
            days_present,
            basic_percent,
            allowance_percent,
            contribution_type: ContributionType::default(),
            lunch_per_day: 0.0,
            company_working_days: 0.0,
            petrol: 0.0,
            dress: 0.0,
            other_accessory: 0.0,
        }
    }

    /// Rejects non-finite numbers and a non-positive `totalDays`.
    ///
    /// Attendance above `totalDays` and negative amounts are accepted as-is.
    pub fn validate(&self) -> Result<(), PayrollError> {
        let fields = [
            ("totalSalary", self.total_salary),
            ("totalDays", self.total_days),
            ("daysPresent", self.days_present),
            ("basicPercent", self.basic_percent),
            ("allowancePercent", self.allowance_percent),
            ("lunchPerDay", self.lunch_per_day),
            ("companyWorkingDays", self.company_working_days),
            ("petrol", self.petrol),
            ("dress", self.dress),
            ("otherAccessory", self.other_accessory),
        ];

        if let Some(&(field, _)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(PayrollError::InvalidInput {
                field,
                reason: "must be a finite number",
            });
        }

        if self.total_days <= 0.0 {
            return Err(PayrollError::InvalidInput {
                field: "totalDays",
                reason: "must be greater than zero",
            });
        }

        Ok(())
    }
}

/// Full-precision output of the salary formula.
#[derive(Debug, Clone, PartialEq)]
pub struct SalaryBreakdown {
    pub basic_earned: f64,
    pub allowance_earned: f64,
    pub employee_contribution: f64,
    pub employer_contribution: f64,
    pub total_contribution: f64,
    /// Earned salary plus the employee contribution.
    pub total_salary: f64,
    pub total_b: f64,
    pub sst: f64,
    pub net_salary: f64,
    pub lunch_total: f64,
    pub accessories_total: f64,
    pub final_payable: f64,
    pub contribution_type: ContributionType,
}

impl SalaryBreakdown {
    pub fn rounded(&self) -> SalaryResult {
        SalaryResult {
            basic_earned: round1(self.basic_earned),
            allowance_earned: round1(self.allowance_earned),
            employee_contribution: round1(self.employee_contribution),
            employer_contribution: round1(self.employer_contribution),
            total_contribution: round1(self.total_contribution),
            total_salary: round1(self.total_salary),
            total_b: round1(self.total_b),
            sst: round1(self.sst),
            net_salary: round1(self.net_salary),
            lunch_total: round1(self.lunch_total),
            accessories_total: round1(self.accessories_total),
            final_payable: round1(self.final_payable),
            contribution_type: self.contribution_type,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SalaryResult {
    #[schema(example = 45733.3)]
    pub basic_earned: f64,
    #[schema(example = 19600.0)]
    pub allowance_earned: f64,
    #[schema(example = 4573.3)]
    pub employee_contribution: f64,
    #[schema(example = 4573.3)]
    pub employer_contribution: f64,
    #[schema(example = 9146.7)]
    pub total_contribution: f64,
    #[schema(example = 69906.7)]
    pub total_salary: f64,
    #[schema(example = 60760.0)]
    pub total_b: f64,
    #[schema(example = 607.6)]
    pub sst: f64,
    #[schema(example = 60152.4)]
    pub net_salary: f64,
    #[schema(example = 0.0)]
    pub lunch_total: f64,
    #[schema(example = 0.0)]
    pub accessories_total: f64,
    #[schema(example = 60152.4)]
    pub final_payable: f64,
    pub contribution_type: ContributionType,
}
