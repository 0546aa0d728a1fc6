//! Specialising crop calendar templates for an actual season.

use std::path::Path;

use chrono::NaiveDate;
use tracing::info;

use crate::document::AgroManagement;
use crate::error::AgroError;

/// The two dates written into a campaign.
///
/// `campaign_start` becomes the campaign key and `crop_start` the crop
/// calendar's `crop_start_date`. Both come from the sowing date unless the
/// caller opens the campaign earlier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CampaignDates {
    /// First day of the campaign.
    pub campaign_start: NaiveDate,
    /// Day the crop starts (sowing or emergence).
    pub crop_start: NaiveDate,
}

impl CampaignDates {
    /// Creates campaign dates with an explicit campaign opening.
    ///
    /// # Errors
    ///
    /// Returns [`AgroError::CropStartBeforeCampaign`] if `crop_start` is
    /// earlier than `campaign_start`.
    pub fn new(campaign_start: NaiveDate, crop_start: NaiveDate) -> Result<Self, AgroError> {
        if crop_start < campaign_start {
            return Err(AgroError::CropStartBeforeCampaign {
                campaign_start,
                crop_start,
            });
        }
        Ok(Self {
            campaign_start,
            crop_start,
        })
    }

    /// Opens the campaign on the sowing date itself.
    pub fn from_sowing(sowing_date: NaiveDate) -> Self {
        Self {
            campaign_start: sowing_date,
            crop_start: sowing_date,
        }
    }
}

/// Loads the template at `template` and specialises it for `sowing_date`.
///
/// The placeholder campaign key and the crop start date are both replaced by
/// the sowing date. Nothing is written to disk.
///
/// # Errors
///
/// Returns [`AgroError::FileNotFound`] if the template does not exist,
/// [`AgroError::Parse`] if it is not valid YAML, and
/// [`AgroError::MissingField`] if `AgroManagement` or `CropCalendar` is
/// absent.
pub fn get_agromanager(sowing_date: NaiveDate, template: &Path) -> Result<AgroManagement, AgroError> {
    configure(template, CampaignDates::from_sowing(sowing_date))
}

/// Loads the template at `template` and specialises it with separate
/// campaign and crop start dates.
///
/// # Errors
///
/// See [`get_agromanager`].
pub fn configure(template: &Path, dates: CampaignDates) -> Result<AgroManagement, AgroError> {
    let mut doc = AgroManagement::load(template)?;
    doc.specialize(dates)?;
    info!(
        template = %template.display(),
        campaign_start = %dates.campaign_start,
        crop_start = %dates.crop_start,
        "agro-management configured"
    );
    Ok(doc)
}
