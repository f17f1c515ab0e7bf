use crate::constants::MODEL_TARGET_HEIGHT;
use crate::error::{SceneError, SceneResult};
use crate::mesh::MeshHierarchy;
use glam::{Mat4, Vec3};

/// Uniform scale plus translation that normalises a freshly loaded model:
/// largest extent becomes [`MODEL_TARGET_HEIGHT`], centred on x/z, feet on
/// y = 0.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModelTransform {
    pub scale: f32,
    pub translation: Vec3,
}

impl ModelTransform {
    pub fn fit(model: &MeshHierarchy) -> SceneResult<Self> {
        Self::fit_to_height(model, MODEL_TARGET_HEIGHT)
    }

    pub fn fit_to_height(model: &MeshHierarchy, height: f32) -> SceneResult<Self> {
        let mut raw = model.clone();
        raw.set_root_transform(Mat4::IDENTITY);
        let bounds = raw.world_bounds().ok_or(SceneError::EmptyModel)?;
        let extent = bounds.size().max_element();
        if !extent.is_finite() || extent <= f32::EPSILON {
            return Err(SceneError::DegenerateModel { extent });
        }
        let scale = height / extent;
        let center = bounds.center() * scale;
        let translation = Vec3::new(-center.x, -bounds.min.y * scale, -center.z);
        Ok(Self { scale, translation })
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_translation(self.translation) * Mat4::from_scale(Vec3::splat(self.scale))
    }

    pub fn apply(&self, model: &mut MeshHierarchy) {
        model.set_root_transform(self.matrix());
        log::info!(
            "[load] model scaled by {:.4}, positioned at ({:.3},{:.3},{:.3})",
            self.scale,
            self.translation.x,
            self.translation.y,
            self.translation.z
        );
    }
}
