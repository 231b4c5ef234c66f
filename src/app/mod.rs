//! Application use cases.

mod contact;
mod dashboard;
mod data_transfer;
mod note;
mod opportunity;

pub use contact::{contact_create, contact_get, contact_list, ContactCreateReq, ContactDto};
pub use dashboard::{
    dashboard_summary, pipeline_by_stage, revenue_by_month, DashboardSummaryDto, MonthRevenueDto,
    StageValueDto,
};
pub use data_transfer::{
    export_contacts_csv, export_opportunities_csv, import_contacts_csv, ContactImportReport,
};
pub use note::{note_create, note_list, NoteCreateReq, NoteDto};
pub use opportunity::{opportunity_create, opportunity_list, OpportunityCreateReq, OpportunityDto};
