//! Volume render window handles

use tracing::{debug, instrument};
use voxview_proto::v1 as proto;

use crate::client::Service;
use crate::error::{Error, Result, check_found, check_ok};
use crate::roi_volume::RoiVolume;
use crate::viewer::ViewerController;

/// Handle to a volume render window
#[derive(Debug, Clone)]
pub struct VrController {
    uid: String,
    service: Service,
}

impl VrController {
    pub(crate) fn new(uid: String, service: Service) -> Self {
        Self { uid, service }
    }

    /// Remote identifier of the volume render window
    #[must_use]
    pub fn uid(&self) -> &str {
        &self.uid
    }

    fn handle(&self) -> proto::VrController {
        proto::VrController {
            uid: self.uid.clone(),
        }
    }

    /// Current rendering mode, e.g. `"VR"` or `"MIP"`
    #[instrument(skip(self))]
    pub async fn rendering_mode(&self) -> Result<String> {
        let response = self
            .service
            .clone()
            .vr_controller_rendering_mode(self.handle())
            .await?
            .into_inner();
        check_found(response.status, "volume render window")?;
        Ok(response.rendering_mode)
    }

    /// Switch the rendering mode
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::RemoteFailure`] if the host does not accept
    /// the mode.
    #[instrument(skip(self, rendering_mode))]
    pub async fn set_rendering_mode(&self, rendering_mode: impl Into<String>) -> Result<()> {
        let request = proto::VrControllerSetRenderingModeRequest {
            vr_controller: Some(self.handle()),
            rendering_mode: rendering_mode.into(),
        };
        let response = self
            .service
            .clone()
            .vr_controller_set_rendering_mode(request)
            .await?
            .into_inner();
        check_ok(response.status, "set rendering mode")
    }

    /// Render style of the window
    #[instrument(skip(self))]
    pub async fn style(&self) -> Result<String> {
        let response = self
            .service
            .clone()
            .vr_controller_style(self.handle())
            .await?
            .into_inner();
        check_found(response.status, "volume render window")?;
        Ok(response.style)
    }

    /// Window title
    #[instrument(skip(self))]
    pub async fn title(&self) -> Result<String> {
        let response = self
            .service
            .clone()
            .vr_controller_title(self.handle())
            .await?
            .into_inner();
        check_found(response.status, "volume render window")?;
        Ok(response.title)
    }

    /// Window level and window width as a `(wl, ww)` pair
    #[instrument(skip(self))]
    pub async fn wlww(&self) -> Result<(f64, f64)> {
        let response = self
            .service
            .clone()
            .vr_controller_wlww(self.handle())
            .await?
            .into_inner();
        check_found(response.status, "volume render window")?;
        Ok((response.wl, response.ww))
    }

    /// Set the window level and window width in one request
    #[instrument(skip(self))]
    pub async fn set_wlww(&self, wl: f64, ww: f64) -> Result<()> {
        let request = proto::VrControllerSetWlwwRequest {
            vr_controller: Some(self.handle()),
            wl,
            ww,
        };
        let response = self
            .service
            .clone()
            .vr_controller_set_wlww(request)
            .await?
            .into_inner();
        check_ok(response.status, "set window level and width")
    }

    /// The 2D viewer blended into this render window
    #[instrument(skip(self))]
    pub async fn blending_controller(&self) -> Result<ViewerController> {
        let response = self
            .service
            .clone()
            .vr_controller_blending_controller(self.handle())
            .await?
            .into_inner();
        check_found(response.status, "blending controller")?;
        let viewer = response
            .viewer
            .ok_or_else(|| Error::missing_field("viewer handle"))?;
        Ok(ViewerController::new(viewer.uid, self.service.clone()))
    }

    /// The 2D viewer this render window was opened from
    #[instrument(skip(self))]
    pub async fn viewer_2d(&self) -> Result<ViewerController> {
        let response = self
            .service
            .clone()
            .vr_controller_viewer2d(self.handle())
            .await?
            .into_inner();
        check_found(response.status, "2D viewer")?;
        let viewer = response
            .viewer
            .ok_or_else(|| Error::missing_field("viewer handle"))?;
        Ok(ViewerController::new(viewer.uid, self.service.clone()))
    }

    /// The ROI volumes shown in this window, in the order the host lists them
    #[instrument(skip(self))]
    pub async fn roi_volumes(&self) -> Result<Vec<RoiVolume>> {
        let response = self
            .service
            .clone()
            .vr_controller_roi_volumes(self.handle())
            .await?
            .into_inner();
        check_found(response.status, "volume render window")?;
        let rois: Vec<_> = response
            .roi_volumes
            .into_iter()
            .map(|r| RoiVolume::new(r.uid, self.service.clone()))
            .collect();
        debug!(count = rois.len(), "listed ROI volumes");
        Ok(rois)
    }

    /// Hide the given ROI volume
    #[instrument(skip(self, roi_volume))]
    pub async fn hide_roi_volume(&self, roi_volume: &RoiVolume) -> Result<()> {
        let request = proto::VrControllerRoiVolumeRequest {
            vr_controller: Some(self.handle()),
            roi_volume: Some(proto::RoiVolume {
                uid: roi_volume.uid().to_string(),
            }),
        };
        let response = self
            .service
            .clone()
            .vr_controller_hide_roi_volume(request)
            .await?
            .into_inner();
        check_ok(response.status, "hide ROI volume")
    }

    /// Display the given ROI volume
    #[instrument(skip(self, roi_volume))]
    pub async fn display_roi_volume(&self, roi_volume: &RoiVolume) -> Result<()> {
        let request = proto::VrControllerRoiVolumeRequest {
            vr_controller: Some(self.handle()),
            roi_volume: Some(proto::RoiVolume {
                uid: roi_volume.uid().to_string(),
            }),
        };
        let response = self
            .service
            .clone()
            .vr_controller_display_roi_volume(request)
            .await?
            .into_inner();
        check_ok(response.status, "display ROI volume")
    }

    /// Ask the host to redraw the render window
    #[instrument(skip(self))]
    pub async fn needs_display_update(&self) -> Result<()> {
        let response = self
            .service
            .clone()
            .vr_controller_needs_display_update(self.handle())
            .await?
            .into_inner();
        check_ok(response.status, "redraw volume render window")
    }
}

impl PartialEq for VrController {
    fn eq(&self, other: &Self) -> bool {
        self.uid == other.uid
    }
}

impl Eq for VrController {}
