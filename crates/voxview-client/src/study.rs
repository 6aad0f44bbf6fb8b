//! Study handles

use chrono::{DateTime, NaiveDate, Utc};
use tracing::{debug, instrument};
use voxview_proto::v1 as proto;

use crate::client::Service;
use crate::convert;
use crate::error::{Result, check_found};
use crate::image::DicomImage;
use crate::series::DicomSeries;

/// Handle to a study in the host's database
///
/// All accessors dereference the handle on the host side; if the study has
/// been removed since the handle was obtained they fail with
/// [`crate::Error::NotFound`].
#[derive(Debug, Clone)]
pub struct DicomStudy {
    uid: String,
    service: Service,
}

impl DicomStudy {
    pub(crate) fn new(uid: String, service: Service) -> Self {
        Self { uid, service }
    }

    /// Remote identifier of the study
    #[must_use]
    pub fn uid(&self) -> &str {
        &self.uid
    }

    fn handle(&self) -> proto::DicomStudy {
        proto::DicomStudy {
            uid: self.uid.clone(),
        }
    }

    /// Date and time at which the study was acquired
    #[instrument(skip(self))]
    pub async fn date(&self) -> Result<DateTime<Utc>> {
        let response = self
            .service
            .clone()
            .dicom_study_date(self.handle())
            .await?
            .into_inner();
        check_found(response.status, "study")?;
        convert::datetime_from_epoch(response.date)
    }

    /// Date and time at which the study entered the database
    #[instrument(skip(self))]
    pub async fn date_added(&self) -> Result<DateTime<Utc>> {
        let response = self
            .service
            .clone()
            .dicom_study_date_added(self.handle())
            .await?
            .into_inner();
        check_found(response.status, "study")?;
        convert::datetime_from_epoch(response.date_added)
    }

    /// Birth date of the patient the study belongs to
    #[instrument(skip(self))]
    pub async fn date_of_birth(&self) -> Result<NaiveDate> {
        let response = self
            .service
            .clone()
            .dicom_study_date_of_birth(self.handle())
            .await?
            .into_inner();
        check_found(response.status, "study")?;
        convert::date_from_epoch(response.date_of_birth)
    }

    /// Name of the institution the study was acquired at
    #[instrument(skip(self))]
    pub async fn institution_name(&self) -> Result<String> {
        let response = self
            .service
            .clone()
            .dicom_study_institution_name(self.handle())
            .await?
            .into_inner();
        check_found(response.status, "study")?;
        Ok(response.institution_name)
    }

    /// Modalities present in the study, as the host formats them
    #[instrument(skip(self))]
    pub async fn modalities(&self) -> Result<String> {
        let response = self
            .service
            .clone()
            .dicom_study_modalities(self.handle())
            .await?
            .into_inner();
        check_found(response.status, "study")?;
        Ok(response.modalities)
    }

    /// Patient name the study is filed under
    #[instrument(skip(self))]
    pub async fn name(&self) -> Result<String> {
        let response = self
            .service
            .clone()
            .dicom_study_name(self.handle())
            .await?
            .into_inner();
        check_found(response.status, "study")?;
        Ok(response.name)
    }

    /// Number of images in the study
    #[instrument(skip(self))]
    pub async fn number_of_images(&self) -> Result<i32> {
        let response = self
            .service
            .clone()
            .dicom_study_number_of_images(self.handle())
            .await?
            .into_inner();
        check_found(response.status, "study")?;
        Ok(response.number_of_images)
    }

    /// Patient identifier
    #[instrument(skip(self))]
    pub async fn patient_id(&self) -> Result<String> {
        let response = self
            .service
            .clone()
            .dicom_study_patient_id(self.handle())
            .await?
            .into_inner();
        check_found(response.status, "study")?;
        Ok(response.patient_id)
    }

    /// Patient sex as recorded in the study
    #[instrument(skip(self))]
    pub async fn patient_sex(&self) -> Result<String> {
        let response = self
            .service
            .clone()
            .dicom_study_patient_sex(self.handle())
            .await?
            .into_inner();
        check_found(response.status, "study")?;
        Ok(response.patient_sex)
    }

    /// Patient unique identifier
    #[instrument(skip(self))]
    pub async fn patient_uid(&self) -> Result<String> {
        let response = self
            .service
            .clone()
            .dicom_study_patient_uid(self.handle())
            .await?
            .into_inner();
        check_found(response.status, "study")?;
        Ok(response.patient_uid)
    }

    /// Performing physician
    #[instrument(skip(self))]
    pub async fn performing_physician(&self) -> Result<String> {
        let response = self
            .service
            .clone()
            .dicom_study_performing_physician(self.handle())
            .await?
            .into_inner();
        check_found(response.status, "study")?;
        Ok(response.performing_physician)
    }

    /// Referring physician
    #[instrument(skip(self))]
    pub async fn referring_physician(&self) -> Result<String> {
        let response = self
            .service
            .clone()
            .dicom_study_referring_physician(self.handle())
            .await?
            .into_inner();
        check_found(response.status, "study")?;
        Ok(response.referring_physician)
    }

    /// All series in the study, in the order the host lists them
    #[instrument(skip(self))]
    pub async fn series(&self) -> Result<Vec<DicomSeries>> {
        let response = self
            .service
            .clone()
            .dicom_study_series(self.handle())
            .await?
            .into_inner();
        check_found(response.status, "study")?;
        let series: Vec<_> = response
            .series
            .into_iter()
            .map(|s| DicomSeries::new(s.uid, self.service.clone()))
            .collect();
        debug!(count = series.len(), "listed study series");
        Ok(series)
    }

    /// All images in the study, in the order the host lists them
    #[instrument(skip(self))]
    pub async fn images(&self) -> Result<Vec<DicomImage>> {
        let response = self
            .service
            .clone()
            .dicom_study_images(self.handle())
            .await?
            .into_inner();
        check_found(response.status, "study")?;
        let images: Vec<_> = response
            .images
            .into_iter()
            .map(|i| DicomImage::new(i.uid, self.service.clone()))
            .collect();
        debug!(count = images.len(), "listed study images");
        Ok(images)
    }

    /// Study instance UID from the DICOM header
    #[instrument(skip(self))]
    pub async fn study_instance_uid(&self) -> Result<String> {
        let response = self
            .service
            .clone()
            .dicom_study_study_instance_uid(self.handle())
            .await?
            .into_inner();
        check_found(response.status, "study")?;
        Ok(response.study_instance_uid)
    }

    /// Study description from the DICOM header
    #[instrument(skip(self))]
    pub async fn study_name(&self) -> Result<String> {
        let response = self
            .service
            .clone()
            .dicom_study_study_name(self.handle())
            .await?
            .into_inner();
        check_found(response.status, "study")?;
        Ok(response.study_name)
    }

    /// Number of files backing the study
    #[instrument(skip(self))]
    pub async fn number_of_files(&self) -> Result<i32> {
        let response = self
            .service
            .clone()
            .dicom_study_number_of_files(self.handle())
            .await?
            .into_inner();
        check_found(response.status, "study")?;
        Ok(response.number_of_files)
    }

    /// Number of files backing the study, not counting multiframe files
    #[instrument(skip(self))]
    pub async fn number_of_files_excluding_multiframes(&self) -> Result<i32> {
        let response = self
            .service
            .clone()
            .dicom_study_number_of_files_excluding_multiframes(self.handle())
            .await?
            .into_inner();
        check_found(response.status, "study")?;
        Ok(response.number_of_files)
    }

    /// Raw on-disk file count for the study
    #[instrument(skip(self))]
    pub async fn raw_number_of_files(&self) -> Result<i32> {
        let response = self
            .service
            .clone()
            .dicom_study_raw_number_of_files(self.handle())
            .await?
            .into_inner();
        check_found(response.status, "study")?;
        Ok(response.number_of_files)
    }

    /// On-disk paths of the files backing the study, in host order
    #[instrument(skip(self))]
    pub async fn paths(&self) -> Result<Vec<String>> {
        let response = self
            .service
            .clone()
            .dicom_study_paths(self.handle())
            .await?
            .into_inner();
        check_found(response.status, "study")?;
        Ok(response.paths)
    }
}

impl PartialEq for DicomStudy {
    fn eq(&self, other: &Self) -> bool {
        self.uid == other.uid
    }
}

impl Eq for DicomStudy {}
