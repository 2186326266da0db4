use crate::catalog::ArtworkRecord;
use crate::config::{FrameSizeConfig, WallTable};
use crate::constants::*;
use crate::error::{GalleryError, Result};
use crate::layout::{plan_layout, Placement};
use crate::scene::{vec3_attr, Primitive, SceneHandle};

/// Builds every placeable artwork under `#artworks-container` and returns
/// the entity nodes in placement order.
///
/// The container is resolved before anything is created, so a page without
/// it is left untouched. An artwork the host fails to create is logged and
/// omitted; the rest are still placed.
pub fn build_artworks<S: SceneHandle>(
    scene: &mut S,
    artworks: &[ArtworkRecord],
    walls: &WallTable,
) -> Result<Vec<S::Node>> {
    let container = scene
        .query(ARTWORKS_CONTAINER_SELECTOR)
        .ok_or(GalleryError::MissingAnchor(ARTWORKS_CONTAINER_SELECTOR))?;

    let placements = plan_layout(artworks, walls);
    let mut entities = Vec::with_capacity(placements.len());
    for p in &placements {
        let artwork = &artworks[p.artwork];
        let entity = match build_artwork(scene, artwork, p) {
            Ok(entity) => entity,
            Err(e) => {
                log::warn!("[build] skipping `{}`: {}", artwork.id, e);
                continue;
            }
        };
        scene.append_child(&container, &entity);
        entities.push(entity);
    }
    log::info!(
        "[build] created {} of {} artworks",
        entities.len(),
        artworks.len()
    );
    Ok(entities)
}

/// Entity → frame, image plane, title, label plate → label text.
fn build_artwork<S: SceneHandle>(
    scene: &mut S,
    artwork: &ArtworkRecord,
    placement: &Placement,
) -> Result<S::Node> {
    let size = FrameSizeConfig::for_size(artwork.frame_size);

    let entity = scene.create(Primitive::Entity)?;
    scene.set_attribute(&entity, "id", &artwork.node_id());
    scene.add_class(&entity, INTERACTIVE_CLASS);
    scene.add_class(&entity, ARTWORK_CLASS);
    scene.set_attribute(&entity, "position", &vec3_attr(placement.position));
    scene.set_attribute(&entity, "rotation", &vec3_attr(placement.rotation));
    scene.set_attribute(&entity, ARTWORK_DATA_ATTR, &artwork.to_attribute());

    let frame = scene.create(Primitive::Box)?;
    scene.set_attribute(&frame, "width", &size.frame_width.to_string());
    scene.set_attribute(&frame, "height", &size.frame_height.to_string());
    scene.set_attribute(&frame, "depth", &FRAME_DEPTH.to_string());
    scene.set_attribute(&frame, "color", FRAME_COLOR);
    scene.set_attribute(&frame, "material", FRAME_MATERIAL);
    scene.set_attribute(&frame, "position", "0 0 0");

    let image = scene.create(Primitive::Plane)?;
    scene.set_attribute(&image, "width", &size.width.to_string());
    scene.set_attribute(&image, "height", &size.height.to_string());
    scene.set_attribute(&image, "position", &format!("0 0 {IMAGE_Z}"));
    scene.set_attribute(
        &image,
        "material",
        &format!("src: {}; roughness: 0.1;", artwork.image_url),
    );

    let title = text_node(scene, &artwork.title, "#ffffff", TITLE_Z)?;

    let label = scene.create(Primitive::Plane)?;
    scene.set_attribute(&label, "width", &LABEL_WIDTH.to_string());
    scene.set_attribute(&label, "height", &LABEL_HEIGHT.to_string());
    scene.set_attribute(&label, "color", "#ffffff");
    scene.set_attribute(
        &label,
        "position",
        &format!("0 {} {LABEL_Z}", size.label_y()),
    );
    scene.set_attribute(&label, "material", LABEL_MATERIAL);

    let label_text = text_node(scene, &artwork.label_text(), "#000000", LABEL_TEXT_Z)?;

    scene.append_child(&label, &label_text);
    scene.append_child(&entity, &frame);
    scene.append_child(&entity, &image);
    scene.append_child(&entity, &title);
    scene.append_child(&entity, &label);
    Ok(entity)
}

fn text_node<S: SceneHandle>(scene: &mut S, value: &str, color: &str, z: f32) -> Result<S::Node> {
    let text = scene.create(Primitive::Text)?;
    scene.set_attribute(&text, "value", value);
    scene.set_attribute(&text, "align", "center");
    scene.set_attribute(&text, "width", &TEXT_WIDTH.to_string());
    scene.set_attribute(&text, "color", color);
    scene.set_attribute(&text, "position", &format!("0 0 {z}"));
    scene.set_attribute(&text, "font", TEXT_FONT);
    Ok(text)
}
