//! Image handles

use chrono::{DateTime, Utc};
use tracing::instrument;
use voxview_proto::v1 as proto;

use crate::client::Service;
use crate::convert;
use crate::error::{Error, Result, check_found};
use crate::series::DicomSeries;

/// Handle to a single image in the host's database
#[derive(Debug, Clone)]
pub struct DicomImage {
    uid: String,
    service: Service,
}

impl DicomImage {
    pub(crate) fn new(uid: String, service: Service) -> Self {
        Self { uid, service }
    }

    /// Remote identifier of the image
    #[must_use]
    pub fn uid(&self) -> &str {
        &self.uid
    }

    fn handle(&self) -> proto::DicomImage {
        proto::DicomImage {
            uid: self.uid.clone(),
        }
    }

    /// Date and time at which the image was acquired
    #[instrument(skip(self))]
    pub async fn date(&self) -> Result<DateTime<Utc>> {
        let response = self
            .service
            .clone()
            .dicom_image_date(self.handle())
            .await?
            .into_inner();
        check_found(response.status, "image")?;
        convert::datetime_from_epoch(response.date)
    }

    /// Instance number from the DICOM header
    #[instrument(skip(self))]
    pub async fn instance_number(&self) -> Result<i32> {
        let response = self
            .service
            .clone()
            .dicom_image_instance_number(self.handle())
            .await?
            .into_inner();
        check_found(response.status, "image")?;
        Ok(response.instance_number)
    }

    /// Modality of the image
    #[instrument(skip(self))]
    pub async fn modality(&self) -> Result<String> {
        let response = self
            .service
            .clone()
            .dicom_image_modality(self.handle())
            .await?
            .into_inner();
        check_found(response.status, "image")?;
        Ok(response.modality)
    }

    /// Number of frames in the image
    #[instrument(skip(self))]
    pub async fn number_of_frames(&self) -> Result<i32> {
        let response = self
            .service
            .clone()
            .dicom_image_number_of_frames(self.handle())
            .await?
            .into_inner();
        check_found(response.status, "image")?;
        Ok(response.number_of_frames)
    }

    /// The series this image belongs to
    #[instrument(skip(self))]
    pub async fn series(&self) -> Result<DicomSeries> {
        let response = self
            .service
            .clone()
            .dicom_image_series(self.handle())
            .await?
            .into_inner();
        check_found(response.status, "image")?;
        let series = response
            .series
            .ok_or_else(|| Error::missing_field("series handle"))?;
        Ok(DicomSeries::new(series.uid, self.service.clone()))
    }

    /// Slice location in millimetres, signed along the scan axis
    #[instrument(skip(self))]
    pub async fn slice_location(&self) -> Result<f64> {
        let response = self
            .service
            .clone()
            .dicom_image_slice_location(self.handle())
            .await?
            .into_inner();
        check_found(response.status, "image")?;
        Ok(response.slice_location)
    }

    /// Full on-disk path of the image file
    #[instrument(skip(self))]
    pub async fn complete_path(&self) -> Result<String> {
        let response = self
            .service
            .clone()
            .dicom_image_complete_path(self.handle())
            .await?
            .into_inner();
        check_found(response.status, "image")?;
        Ok(response.complete_path)
    }

    /// Image height in pixels
    #[instrument(skip(self))]
    pub async fn height(&self) -> Result<i32> {
        let response = self
            .service
            .clone()
            .dicom_image_height(self.handle())
            .await?
            .into_inner();
        check_found(response.status, "image")?;
        Ok(response.height)
    }

    /// Image width in pixels
    #[instrument(skip(self))]
    pub async fn width(&self) -> Result<i32> {
        let response = self
            .service
            .clone()
            .dicom_image_width(self.handle())
            .await?
            .into_inner();
        check_found(response.status, "image")?;
        Ok(response.width)
    }

    /// SOP instance UID from the DICOM header
    #[instrument(skip(self))]
    pub async fn sop_instance_uid(&self) -> Result<String> {
        let response = self
            .service
            .clone()
            .dicom_image_sop_instance_uid(self.handle())
            .await?
            .into_inner();
        check_found(response.status, "image")?;
        Ok(response.sop_instance_uid)
    }
}

impl PartialEq for DicomImage {
    fn eq(&self, other: &Self) -> bool {
        self.uid == other.uid
    }
}

impl Eq for DicomImage {}
