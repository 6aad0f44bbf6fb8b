//! 2D viewer window handles

use tracing::instrument;
use voxview_proto::v1 as proto;

use crate::client::Service;
use crate::error::{Result, check_found, check_ok};

/// Handle to a 2D viewer window
#[derive(Debug, Clone)]
pub struct ViewerController {
    uid: String,
    service: Service,
}

impl ViewerController {
    pub(crate) fn new(uid: String, service: Service) -> Self {
        Self { uid, service }
    }

    /// Remote identifier of the viewer window
    #[must_use]
    pub fn uid(&self) -> &str {
        &self.uid
    }

    fn handle(&self) -> proto::ViewerController {
        proto::ViewerController {
            uid: self.uid.clone(),
        }
    }

    /// Window title
    #[instrument(skip(self))]
    pub async fn title(&self) -> Result<String> {
        let response = self
            .service
            .clone()
            .viewer_controller_title(self.handle())
            .await?
            .into_inner();
        check_found(response.status, "viewer window")?;
        Ok(response.title)
    }

    /// Modality of the displayed series
    #[instrument(skip(self))]
    pub async fn modality(&self) -> Result<String> {
        let response = self
            .service
            .clone()
            .viewer_controller_modality(self.handle())
            .await?
            .into_inner();
        check_found(response.status, "viewer window")?;
        Ok(response.modality)
    }

    /// Window level and window width as a `(wl, ww)` pair
    #[instrument(skip(self))]
    pub async fn wlww(&self) -> Result<(f64, f64)> {
        let response = self
            .service
            .clone()
            .viewer_controller_wlww(self.handle())
            .await?
            .into_inner();
        check_found(response.status, "viewer window")?;
        Ok((response.wl, response.ww))
    }

    /// Set the window level and window width in one request
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::RemoteFailure`] if the host rejects the values.
    #[instrument(skip(self))]
    pub async fn set_wlww(&self, wl: f64, ww: f64) -> Result<()> {
        let request = proto::ViewerControllerSetWlwwRequest {
            viewer: Some(self.handle()),
            wl,
            ww,
        };
        let response = self
            .service
            .clone()
            .viewer_controller_set_wlww(request)
            .await?
            .into_inner();
        check_ok(response.status, "set window level and width")
    }

    /// Ask the host to redraw the viewer window
    #[instrument(skip(self))]
    pub async fn needs_display_update(&self) -> Result<()> {
        let response = self
            .service
            .clone()
            .viewer_controller_needs_display_update(self.handle())
            .await?
            .into_inner();
        check_ok(response.status, "redraw viewer window")
    }
}

impl PartialEq for ViewerController {
    fn eq(&self, other: &Self) -> bool {
        self.uid == other.uid
    }
}

impl Eq for ViewerController {}
