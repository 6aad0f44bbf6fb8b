//! The database browser window

use tracing::{debug, instrument};
use voxview_proto::v1 as proto;

use crate::client::Service;
use crate::error::{Result, check_found, check_ok};
use crate::series::DicomSeries;
use crate::study::DicomStudy;

/// Handle to the host's database browser window
#[derive(Debug, Clone)]
pub struct BrowserController {
    uid: String,
    service: Service,
}

impl BrowserController {
    pub(crate) fn new(uid: String, service: Service) -> Self {
        Self { uid, service }
    }

    /// Remote identifier of the browser window
    #[must_use]
    pub fn uid(&self) -> &str {
        &self.uid
    }

    fn handle(&self) -> proto::BrowserController {
        proto::BrowserController {
            uid: self.uid.clone(),
        }
    }

    /// Copy files into the host's database, skipping any it already holds
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::RemoteFailure`] if the host rejects the copy.
    #[instrument(skip(self, paths))]
    pub async fn copy_files_into_database(&self, paths: Vec<String>) -> Result<()> {
        let count = paths.len();
        let request = proto::BrowserControllerCopyFilesIfNeededRequest {
            browser: Some(self.handle()),
            paths,
        };
        let response = self
            .service
            .clone()
            .browser_controller_copy_files_if_needed(request)
            .await?
            .into_inner();
        check_ok(response.status, "copy files into database")?;
        debug!(count, "copied files into database");
        Ok(())
    }

    /// The studies and series currently selected in the browser
    ///
    /// Both collections come back in the order the host lists them.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NotFound`] if the browser window has closed.
    #[instrument(skip(self))]
    pub async fn database_selection(&self) -> Result<(Vec<DicomStudy>, Vec<DicomSeries>)> {
        let response = self
            .service
            .clone()
            .browser_controller_database_selection(self.handle())
            .await?
            .into_inner();
        check_found(response.status, "browser window")?;

        let studies: Vec<_> = response
            .studies
            .into_iter()
            .map(|s| DicomStudy::new(s.uid, self.service.clone()))
            .collect();
        let series: Vec<_> = response
            .series
            .into_iter()
            .map(|s| DicomSeries::new(s.uid, self.service.clone()))
            .collect();

        debug!(
            studies = studies.len(),
            series = series.len(),
            "read database selection"
        );
        Ok((studies, series))
    }
}

impl PartialEq for BrowserController {
    fn eq(&self, other: &Self) -> bool {
        self.uid == other.uid
    }
}

impl Eq for BrowserController {}
