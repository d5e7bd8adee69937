//! Salary decomposition: attendance pro-ration, statutory contribution,
//! SST withholding and accessory allowances.
//!
//! [`breakdown`] is the raw formula at full precision. [`calculate`] is the
//! checked entry point used by the HTTP layer; it validates the input and
//! rounds every output field independently.

pub mod rounding;

use crate::error::PayrollError;
use crate::model::salary::{SalaryBreakdown, SalaryInput, SalaryResult};

/// Flat withholding levied on the taxable base.
pub const SST_RATE: f64 = 0.01;

pub fn calculate(input: &SalaryInput) -> Result<SalaryResult, PayrollError> {
    input.validate()?;
    Ok(breakdown(input).rounded())
}

/// Unchecked formula. A zero `total_days` yields non-finite amounts.
pub fn breakdown(input: &SalaryInput) -> SalaryBreakdown {
    let basic = input.total_salary * (input.basic_percent / 100.0);
    let allowance = input.total_salary * (input.allowance_percent / 100.0);

    let basic_earned = (basic / input.total_days) * input.days_present;
    let allowance_earned = (allowance / input.total_days) * input.days_present;

    let (employee_rate, employer_rate) = input.contribution_type.rates();
    let employee_contribution = basic_earned * employee_rate;
    let employer_contribution = basic_earned * employer_rate;
    let total_contribution = employee_contribution + employer_contribution;

    // Only the employee share is added back, but both shares are deducted.
    let total_salary = basic_earned + allowance_earned + employee_contribution;
    let total_b = total_salary - total_contribution;
    let sst = total_b * SST_RATE;
    let net_salary = total_b - sst;

    let lunch_total = input.company_working_days * input.lunch_per_day;
    let accessories_total = lunch_total + input.petrol + input.dress + input.other_accessory;
    let final_payable = net_salary + accessories_total;

    SalaryBreakdown {
        basic_earned,
        allowance_earned,
        employee_contribution,
        employer_contribution,
        total_contribution,
        total_salary,
        total_b,
        sst,
        net_salary,
        lunch_total,
        accessories_total,
        final_payable,
        contribution_type: input.contribution_type,
    }
}
