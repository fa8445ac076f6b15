use std::path::Path;

use image::DynamicImage;
use tracing::{debug, info};

use crate::{
    compositor::{Compositor, PresetSet},
    config::Config,
    error::{Result, SessionError},
    photo::Photo,
    regions::{FeatureKind, Handle, HitTarget, RegionSet},
    session::{
        overlay::draw_regions,
        script::{GestureScript, PointerEvent},
    },
};

/// What the pointer is currently doing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gesture {
    #[default]
    Idle,

    /// Moving a whole region
    Dragging { region: FeatureKind, anchor: (i32, i32) },

    /// Dragging one of a region's handles
    Resizing { region: FeatureKind, handle: Handle, anchor: (i32, i32) },
}

/// One editing session: a photo, its three regions, the pointer state, and
/// the presets that get composited on save
pub struct EditorSession {
    presets: PresetSet,
    compositor: Compositor,
    handle_tolerance: i32,
    image: Option<Photo>,
    regions: Option<RegionSet>,
    selected: Option<FeatureKind>,
    gesture: Gesture,
    result: Option<Photo>,
}

impl EditorSession {
    pub fn new(config: &Config, presets: PresetSet) -> Self {
        Self {
            presets,
            compositor: Compositor::new(config.composite.bounds),
            handle_tolerance: config.interaction.handle_tolerance,
            image: None,
            regions: None,
            selected: None,
            gesture: Gesture::Idle,
            result: None,
        }
    }

    /// Load presets from the configured directory and start an empty session
    pub fn from_config(config: &Config) -> Result<Self> {
        let presets = PresetSet::load(&config.presets)?;
        Ok(Self::new(config, presets))
    }

    /// Decode a photo and start editing it.
    ///
    /// The session is left untouched if the file cannot be decoded.
    pub fn load_image<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        let photo = Photo::open(path)?;
        info!("Loaded {:?} ({}x{})", path, photo.width(), photo.height());
        self.set_image(photo);
        Ok(())
    }

    /// Replace the photo and reset every region to its default placement
    pub fn set_image(&mut self, photo: Photo) {
        self.image = Some(photo);
        self.reset_regions();
    }

    /// Put every region back to its default placement on the current photo.
    /// Clears the selection, any gesture in progress and the last result.
    pub fn reset_regions(&mut self) {
        let Some(image) = self.image.as_ref() else {
            return;
        };

        self.regions = Some(RegionSet::for_image(image.width(), image.height()));
        self.selected = None;
        self.gesture = Gesture::Idle;
        self.result = None;
        debug!("Regions reset to defaults");
    }

    pub fn deselect(&mut self) {
        self.selected = None;
    }

    /// Swap one preset for the rest of the session
    pub fn set_preset(&mut self, kind: FeatureKind, image: DynamicImage) {
        self.presets.set(kind, image);
        info!("Preset for {} replaced", kind);
    }

    /// Load one preset from a file and swap it in
    pub fn load_preset<P: AsRef<Path>>(&mut self, kind: FeatureKind, path: P) -> Result<()> {
        let image = PresetSet::load_one(kind, path.as_ref())?;
        self.set_preset(kind, image);
        Ok(())
    }

    pub fn image(&self) -> Option<&Photo> {
        self.image.as_ref()
    }

    pub fn regions(&self) -> Option<&RegionSet> {
        self.regions.as_ref()
    }

    pub fn selected(&self) -> Option<FeatureKind> {
        self.selected
    }

    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    /// The last composited image, if any
    pub fn result(&self) -> Option<&Photo> {
        self.result.as_ref()
    }

    /// Route a pointer event the way a window's mouse callback would
    pub fn handle_event(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Press { x, y } => self.begin_interaction(x, y),
            PointerEvent::Move { x, y } => self.update_interaction(x, y),
            PointerEvent::Release | PointerEvent::Leave => self.end_interaction(),
        }
    }

    /// Feed every event of a script into the session
    pub fn replay(&mut self, script: &GestureScript) {
        debug!("Replaying {} pointer events", script.len());
        for event in &script.events {
            self.handle_event(*event);
        }
    }

    /// Pointer pressed. Grabs a handle or a region body; a press on empty
    /// space does nothing and keeps the current selection.
    pub fn begin_interaction(&mut self, x: i32, y: i32) {
        let Some(regions) = self.regions.as_ref() else {
            return;
        };

        match regions.hit_test(x, y, self.handle_tolerance) {
            HitTarget::Handle { region, handle } => {
                debug!("Resizing {} by its {} handle", region, handle);
                self.gesture = Gesture::Resizing { region, handle, anchor: (x, y) };
            }
            HitTarget::Body(region) => {
                debug!("Dragging {}", region);
                self.selected = Some(region);
                self.gesture = Gesture::Dragging { region, anchor: (x, y) };
            }
            HitTarget::Miss => {}
        }
    }

    /// Pointer moved. Applies the delta since the last update to the region
    /// being dragged or resized.
    pub fn update_interaction(&mut self, x: i32, y: i32) {
        let Some(regions) = self.regions.as_mut() else {
            return;
        };

        match self.gesture {
            Gesture::Idle => {}
            Gesture::Dragging { region, anchor } => {
                regions.get_mut(region).translate(x.saturating_sub(anchor.0), y.saturating_sub(anchor.1));
                self.gesture = Gesture::Dragging { region, anchor: (x, y) };
            }
            Gesture::Resizing { region, handle, anchor } => {
                handle.apply(regions.get_mut(region), x.saturating_sub(anchor.0), y.saturating_sub(anchor.1));
                self.gesture = Gesture::Resizing { region, handle, anchor: (x, y) };
            }
        }
    }

    /// Pointer released. The selection survives.
    pub fn end_interaction(&mut self) {
        self.gesture = Gesture::Idle;
    }

    /// Composite the presets into a copy of the photo and keep it as the
    /// session result. The photo being edited is not modified.
    pub fn replace_features(&mut self) -> Result<&Photo> {
        let (Some(image), Some(regions)) = (self.image.as_ref(), self.regions.as_ref()) else {
            return Err(SessionError::NoImage.into());
        };

        let mut output = image.clone();
        let written = self
            .compositor
            .replace_features(output.as_image_mut(), regions, &self.presets)?;
        info!("Replaced {} of {} features", written, FeatureKind::ALL.len());

        Ok(self.result.insert(output))
    }

    /// Composite and write the result
    pub fn save_result<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        self.replace_features()?.save(path)?;
        info!("Result saved to {:?}", path);
        Ok(())
    }

    /// Write the last composited result without compositing again
    pub fn save_result_as<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let result = self.result.as_ref().ok_or(SessionError::NoResult)?;
        result.save(path.as_ref())?;
        info!("Result saved to {:?}", path.as_ref());
        Ok(())
    }

    /// The photo with region outlines and, for the selected region, handles
    pub fn render_overlay(&self) -> Result<Photo> {
        let (Some(image), Some(regions)) = (self.image.as_ref(), self.regions.as_ref()) else {
            return Err(SessionError::NoImage.into());
        };

        let mut display = image.clone();
        draw_regions(display.as_image_mut(), regions, self.selected);
        Ok(display)
    }
}
