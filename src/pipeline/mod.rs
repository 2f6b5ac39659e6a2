use thiserror::Error;

pub mod stage2_filter;
pub mod stage3_reduce;
pub mod stage4_project;
pub mod stage5_summary;
pub mod stage6_report;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PipelineError {
    #[error("BILL_OF_LADING column not found in the loaded CSV")]
    MissingShipmentColumn,
    #[error("no rows match the current filters")]
    NoMatchingRows,
}
