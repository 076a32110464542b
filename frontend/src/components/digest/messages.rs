use chrono::NaiveDate;
use common::model::digest::Digest;

use crate::api::ApiError;
use crate::components::notifier::Notification;
use crate::export::ExportFile;

#[derive(Clone, Debug, PartialEq)]
pub enum Msg {
    /// User clicked "Generate Daily Digest".
    Generate,
    /// The generation request settled.
    Generated(Result<Digest, ApiError>),
    /// User clicked "Download Markdown" on the given UTC calendar day.
    Download(NaiveDate),
}

#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    FetchDigest,
    Notify(Notification),
    SaveFile(ExportFile),
}
