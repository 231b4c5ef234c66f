//! Dashboard aggregates, derived client-side from the listing reads.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::Stage;
use crate::error::AppError;
use crate::infra::DbPool;

use super::{contact_list, opportunity_list};

#[derive(Debug, Serialize)]
pub struct DashboardSummaryDto {
    pub total_contacts: usize,
    pub total_opportunities: usize,
    pub total_pipeline_value: f64,
}

#[derive(Debug, Serialize)]
pub struct StageValueDto {
    pub stage: String,
    pub value: f64,
}

#[derive(Debug, Serialize)]
pub struct MonthRevenueDto {
    pub month: String,
    pub value: f64,
}

pub fn dashboard_summary(pool: &DbPool) -> Result<DashboardSummaryDto, AppError> {
    let contacts = contact_list(pool, None)?;
    let opportunities = opportunity_list(pool)?;
    let total_pipeline_value = opportunities.iter().map(|o| o.value).sum();
    Ok(DashboardSummaryDto {
        total_contacts: contacts.len(),
        total_opportunities: opportunities.len(),
        total_pipeline_value,
    })
}

/// Sum of value per stage present in the data. No zero-filling: a stage with
/// no opportunities has no entry. Known stages come out in pipeline order,
/// anything outside the vocabulary follows alphabetically.
pub fn pipeline_by_stage(pool: &DbPool) -> Result<Vec<StageValueDto>, AppError> {
    let opportunities = opportunity_list(pool)?;
    let mut by_stage: BTreeMap<String, f64> = BTreeMap::new();
    for opp in &opportunities {
        *by_stage.entry(opp.stage.clone()).or_insert(0.0) += opp.value;
    }

    let mut out = Vec::new();
    for stage in Stage::all() {
        if let Some(value) = by_stage.remove(stage.as_str()) {
            out.push(StageValueDto {
                stage: stage.as_str().to_string(),
                value,
            });
        }
    }
    for (stage, value) in by_stage {
        out.push(StageValueDto { stage, value });
    }
    Ok(out)
}

/// Sum of value per close month (`YYYY-MM`), ascending.
pub fn revenue_by_month(pool: &DbPool) -> Result<Vec<MonthRevenueDto>, AppError> {
    let opportunities = opportunity_list(pool)?;
    let mut by_month: BTreeMap<String, f64> = BTreeMap::new();
    for opp in &opportunities {
        match NaiveDate::parse_from_str(&opp.close_date, "%Y-%m-%d") {
            Ok(date) => {
                *by_month.entry(date.format("%Y-%m").to_string()).or_insert(0.0) += opp.value;
            }
            Err(_) => {
                log::warn!(
                    "opportunity {} has unparseable close_date `{}`, excluded from monthly revenue",
                    opp.id,
                    opp.close_date
                );
            }
        }
    }
    Ok(by_month
        .into_iter()
        .map(|(month, value)| MonthRevenueDto { month, value })
        .collect())
}
