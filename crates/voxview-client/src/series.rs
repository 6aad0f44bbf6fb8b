//! Series handles

use chrono::{DateTime, Utc};
use tracing::{debug, instrument};
use voxview_proto::v1 as proto;

use crate::client::Service;
use crate::convert;
use crate::error::{Error, Result, check_found};
use crate::image::DicomImage;
use crate::study::DicomStudy;

/// Handle to a series in the host's database
#[derive(Debug, Clone)]
pub struct DicomSeries {
    uid: String,
    service: Service,
}

impl DicomSeries {
    pub(crate) fn new(uid: String, service: Service) -> Self {
        Self { uid, service }
    }

    /// Remote identifier of the series
    #[must_use]
    pub fn uid(&self) -> &str {
        &self.uid
    }

    fn handle(&self) -> proto::DicomSeries {
        proto::DicomSeries {
            uid: self.uid.clone(),
        }
    }

    /// Date and time at which the series was acquired
    #[instrument(skip(self))]
    pub async fn date(&self) -> Result<DateTime<Utc>> {
        let response = self
            .service
            .clone()
            .dicom_series_date(self.handle())
            .await?
            .into_inner();
        check_found(response.status, "series")?;
        convert::datetime_from_epoch(response.date)
    }

    /// All images in the series, in the order the host lists them
    #[instrument(skip(self))]
    pub async fn images(&self) -> Result<Vec<DicomImage>> {
        let response = self
            .service
            .clone()
            .dicom_series_images(self.handle())
            .await?
            .into_inner();
        check_found(response.status, "series")?;
        let images: Vec<_> = response
            .images
            .into_iter()
            .map(|i| DicomImage::new(i.uid, self.service.clone()))
            .collect();
        debug!(count = images.len(), "listed series images");
        Ok(images)
    }

    /// Modality of the series
    #[instrument(skip(self))]
    pub async fn modality(&self) -> Result<String> {
        let response = self
            .service
            .clone()
            .dicom_series_modality(self.handle())
            .await?
            .into_inner();
        check_found(response.status, "series")?;
        Ok(response.modality)
    }

    /// Name of the series
    #[instrument(skip(self))]
    pub async fn name(&self) -> Result<String> {
        let response = self
            .service
            .clone()
            .dicom_series_name(self.handle())
            .await?
            .into_inner();
        check_found(response.status, "series")?;
        Ok(response.name)
    }

    /// Number of images in the series
    #[instrument(skip(self))]
    pub async fn number_of_images(&self) -> Result<i32> {
        let response = self
            .service
            .clone()
            .dicom_series_number_of_images(self.handle())
            .await?
            .into_inner();
        check_found(response.status, "series")?;
        Ok(response.number_of_images)
    }

    /// Series description from the DICOM header
    #[instrument(skip(self))]
    pub async fn series_description(&self) -> Result<String> {
        let response = self
            .service
            .clone()
            .dicom_series_description(self.handle())
            .await?
            .into_inner();
        check_found(response.status, "series")?;
        Ok(response.series_description)
    }

    /// Series instance UID from the DICOM header
    #[instrument(skip(self))]
    pub async fn series_instance_uid(&self) -> Result<String> {
        let response = self
            .service
            .clone()
            .dicom_series_instance_uid(self.handle())
            .await?
            .into_inner();
        check_found(response.status, "series")?;
        Ok(response.series_instance_uid)
    }

    /// SOP class UID of the series
    #[instrument(skip(self))]
    pub async fn sop_class_uid(&self) -> Result<String> {
        let response = self
            .service
            .clone()
            .dicom_series_sop_class_uid(self.handle())
            .await?
            .into_inner();
        check_found(response.status, "series")?;
        Ok(response.sop_class_uid)
    }

    /// The study this series belongs to
    #[instrument(skip(self))]
    pub async fn study(&self) -> Result<DicomStudy> {
        let response = self
            .service
            .clone()
            .dicom_series_study(self.handle())
            .await?
            .into_inner();
        check_found(response.status, "series")?;
        let study = response
            .study
            .ok_or_else(|| Error::missing_field("study handle"))?;
        Ok(DicomStudy::new(study.uid, self.service.clone()))
    }

    /// The next series in the study
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] when this is the last series.
    #[instrument(skip(self))]
    pub async fn next_series(&self) -> Result<DicomSeries> {
        let response = self
            .service
            .clone()
            .dicom_series_next_series(self.handle())
            .await?
            .into_inner();
        check_found(response.status, "next series")?;
        let series = response
            .series
            .ok_or_else(|| Error::missing_field("series handle"))?;
        Ok(DicomSeries::new(series.uid, self.service.clone()))
    }

    /// The previous series in the study
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] when this is the first series.
    #[instrument(skip(self))]
    pub async fn previous_series(&self) -> Result<DicomSeries> {
        let response = self
            .service
            .clone()
            .dicom_series_previous_series(self.handle())
            .await?
            .into_inner();
        check_found(response.status, "previous series")?;
        let series = response
            .series
            .ok_or_else(|| Error::missing_field("series handle"))?;
        Ok(DicomSeries::new(series.uid, self.service.clone()))
    }

    /// On-disk paths of the files backing the series, in host order
    #[instrument(skip(self))]
    pub async fn paths(&self) -> Result<Vec<String>> {
        let response = self
            .service
            .clone()
            .dicom_series_paths(self.handle())
            .await?
            .into_inner();
        check_found(response.status, "series")?;
        Ok(response.paths)
    }

    /// Images of the series in the host's display order
    #[instrument(skip(self))]
    pub async fn sorted_images(&self) -> Result<Vec<DicomImage>> {
        let response = self
            .service
            .clone()
            .dicom_series_sorted_images(self.handle())
            .await?
            .into_inner();
        check_found(response.status, "series")?;
        let images: Vec<_> = response
            .images
            .into_iter()
            .map(|i| DicomImage::new(i.uid, self.service.clone()))
            .collect();
        debug!(count = images.len(), "listed sorted series images");
        Ok(images)
    }
}

impl PartialEq for DicomSeries {
    fn eq(&self, other: &Self) -> bool {
        self.uid == other.uid
    }
}

impl Eq for DicomSeries {}
