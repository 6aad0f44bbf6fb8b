//! ROI volume handles
//!
//! Color channels, opacity and the shading factor all live in `[0, 1]`.
//! Setters check that range locally and refuse to issue a request for a
//! value the host would reject anyway.

use tracing::instrument;
use voxview_proto::v1 as proto;

use crate::client::Service;
use crate::error::{Error, Result, check_found, check_ok};

/// Handle to a 3D region-of-interest volume inside a render window
#[derive(Debug, Clone)]
pub struct RoiVolume {
    uid: String,
    service: Service,
}

impl RoiVolume {
    pub(crate) fn new(uid: String, service: Service) -> Self {
        Self { uid, service }
    }

    /// Remote identifier of the ROI volume
    #[must_use]
    pub fn uid(&self) -> &str {
        &self.uid
    }

    fn handle(&self) -> proto::RoiVolume {
        proto::RoiVolume {
            uid: self.uid.clone(),
        }
    }

    /// Whether the ROI volume is textured
    #[instrument(skip(self))]
    pub async fn texture(&self) -> Result<bool> {
        let response = self
            .service
            .clone()
            .roi_volume_texture(self.handle())
            .await?
            .into_inner();
        check_found(response.status, "ROI volume")?;
        Ok(response.texture)
    }

    /// Enable or disable texturing
    #[instrument(skip(self))]
    pub async fn set_texture(&self, texture: bool) -> Result<()> {
        let request = proto::RoiVolumeSetTextureRequest {
            roi: Some(self.handle()),
            texture,
        };
        let response = self
            .service
            .clone()
            .roi_volume_set_texture(request)
            .await?
            .into_inner();
        check_ok(response.status, "set ROI volume texture")
    }

    /// Whether the ROI volume is currently displayed
    #[instrument(skip(self))]
    pub async fn visible(&self) -> Result<bool> {
        let response = self
            .service
            .clone()
            .roi_volume_visible(self.handle())
            .await?
            .into_inner();
        check_found(response.status, "ROI volume")?;
        Ok(response.visible)
    }

    /// Name of the ROI volume
    #[instrument(skip(self))]
    pub async fn name(&self) -> Result<String> {
        let response = self
            .service
            .clone()
            .roi_volume_name(self.handle())
            .await?
            .into_inner();
        check_found(response.status, "ROI volume")?;
        Ok(response.name)
    }

    /// Color as an `(r, g, b)` tuple, each channel in `[0, 1]`
    #[instrument(skip(self))]
    pub async fn color(&self) -> Result<(f32, f32, f32)> {
        let response = self
            .service
            .clone()
            .roi_volume_color(self.handle())
            .await?
            .into_inner();
        check_found(response.status, "ROI volume")?;
        Ok((response.r, response.g, response.b))
    }

    /// Set the color from an `(r, g, b)` tuple, each channel in `[0, 1]`
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] without issuing a request if any
    /// channel is out of range.
    #[instrument(skip(self))]
    pub async fn set_color(&self, color: (f32, f32, f32)) -> Result<()> {
        let (r, g, b) = color;
        unit_range(r, "red channel")?;
        unit_range(g, "green channel")?;
        unit_range(b, "blue channel")?;
        let request = proto::RoiVolumeSetColorRequest {
            roi: Some(self.handle()),
            r,
            g,
            b,
        };
        let response = self
            .service
            .clone()
            .roi_volume_set_color(request)
            .await?
            .into_inner();
        check_ok(response.status, "set ROI volume color")
    }

    /// Opacity in `[0, 1]`
    #[instrument(skip(self))]
    pub async fn opacity(&self) -> Result<f32> {
        let response = self
            .service
            .clone()
            .roi_volume_opacity(self.handle())
            .await?
            .into_inner();
        check_found(response.status, "ROI volume")?;
        Ok(response.opacity)
    }

    /// Set the opacity, which must lie in `[0, 1]`
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] without issuing a request if the
    /// value is out of range.
    #[instrument(skip(self))]
    pub async fn set_opacity(&self, opacity: f32) -> Result<()> {
        unit_range(opacity, "opacity")?;
        let request = proto::RoiVolumeSetOpacityRequest {
            roi: Some(self.handle()),
            opacity,
        };
        let response = self
            .service
            .clone()
            .roi_volume_set_opacity(request)
            .await?
            .into_inner();
        check_ok(response.status, "set ROI volume opacity")
    }

    /// Shading factor in `[0, 1]`
    #[instrument(skip(self))]
    pub async fn factor(&self) -> Result<f32> {
        let response = self
            .service
            .clone()
            .roi_volume_factor(self.handle())
            .await?
            .into_inner();
        check_found(response.status, "ROI volume")?;
        Ok(response.factor)
    }

    /// Set the shading factor, which must lie in `[0, 1]`
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] without issuing a request if the
    /// value is out of range.
    #[instrument(skip(self))]
    pub async fn set_factor(&self, factor: f32) -> Result<()> {
        unit_range(factor, "factor")?;
        let request = proto::RoiVolumeSetFactorRequest {
            roi: Some(self.handle()),
            factor,
        };
        let response = self
            .service
            .clone()
            .roi_volume_set_factor(request)
            .await?
            .into_inner();
        check_ok(response.status, "set ROI volume factor")
    }

    /// Volume of the region in cubic centimetres
    #[instrument(skip(self))]
    pub async fn volume(&self) -> Result<f32> {
        let response = self
            .service
            .clone()
            .roi_volume_volume(self.handle())
            .await?
            .into_inner();
        check_found(response.status, "ROI volume")?;
        Ok(response.volume)
    }
}

impl PartialEq for RoiVolume {
    fn eq(&self, other: &Self) -> bool {
        self.uid == other.uid
    }
}

impl Eq for RoiVolume {}

// NaN fails the range check like any other out-of-range value.
fn unit_range(value: f32, what: &str) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(Error::invalid_argument(format!(
            "{what} must be in range 0-1, got {value}"
        )))
    }
}
