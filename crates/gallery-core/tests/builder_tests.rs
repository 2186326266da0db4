// Scene construction through the in-memory scene handle.

mod common;

use common::artwork;
use gallery_core::*;
use std::time::Duration;

/// In-memory scene whose `n`th node creation (1-based) is refused.
struct FailingScene {
    inner: MemoryScene,
    created: usize,
    fail_on: usize,
}

impl FailingScene {
    fn new(inner: MemoryScene, fail_on: usize) -> Self {
        Self {
            inner,
            created: 0,
            fail_on,
        }
    }
}

impl SceneHandle for FailingScene {
    type Node = MemoryNode;

    fn query(&self, selector: &str) -> Option<MemoryNode> {
        self.inner.query(selector)
    }
    fn create(&mut self, primitive: Primitive) -> gallery_core::Result<MemoryNode> {
        self.created += 1;
        if self.created == self.fail_on {
            return Err(GalleryError::Host(format!("refused <{}>", primitive.tag())));
        }
        self.inner.create(primitive)
    }
    fn set_attribute(&mut self, node: &MemoryNode, name: &str, value: &str) {
        self.inner.set_attribute(node, name, value)
    }
    fn attribute(&self, node: &MemoryNode, name: &str) -> Option<String> {
        self.inner.attribute(node, name)
    }
    fn add_class(&mut self, node: &MemoryNode, class: &str) {
        self.inner.add_class(node, class)
    }
    fn remove_class(&mut self, node: &MemoryNode, class: &str) {
        self.inner.remove_class(node, class)
    }
    fn has_class(&self, node: &MemoryNode, class: &str) -> bool {
        self.inner.has_class(node, class)
    }
    fn append_child(&mut self, parent: &MemoryNode, child: &MemoryNode) {
        self.inner.append_child(parent, child)
    }
    fn describe(&self, node: &MemoryNode) -> String {
        self.inner.describe(node)
    }
    fn subscribe(&mut self, node: &MemoryNode, event: HostEvent) {
        self.inner.subscribe(node, event)
    }
    fn set_timeout(&mut self, delay: Duration) -> TimerHandle {
        self.inner.set_timeout(delay)
    }
    fn clear_timeout(&mut self, handle: TimerHandle) {
        self.inner.clear_timeout(handle)
    }
    fn is_loaded(&self, scene: &MemoryNode) -> bool {
        self.inner.is_loaded(scene)
    }
    fn set_render_loop(&mut self, scene: &MemoryNode, running: bool) {
        self.inner.set_render_loop(scene, running)
    }
    fn resize_viewport(&mut self, scene: &MemoryNode) {
        self.inner.resize_viewport(scene)
    }
}

#[test]
fn builds_composite_tree_per_artwork() {
    common::init_logs();
    let mut scene = MemoryScene::with_gallery_page();
    let catalog = Catalog::builtin().unwrap();
    let nodes = build_artworks(&mut scene, catalog.artworks(), &WallTable::default()).unwrap();
    assert_eq!(nodes.len(), 6);

    let container = scene.query(ARTWORKS_CONTAINER_SELECTOR).unwrap();
    assert_eq!(scene.children(container), nodes.as_slice());

    let entity = scene.query("#artwork-great-wave").unwrap();
    assert_eq!(scene.tag(entity), "a-entity");
    assert!(scene.has_class(&entity, INTERACTIVE_CLASS));
    assert!(scene.has_class(&entity, ARTWORK_CLASS));
    assert_eq!(scene.attribute(&entity, "position").unwrap(), "0 2 7");
    assert_eq!(scene.attribute(&entity, "rotation").unwrap(), "0 180 0");

    let kids = scene.children(entity).to_vec();
    let tags: Vec<&str> = kids.iter().map(|n| scene.tag(*n)).collect();
    assert_eq!(tags, ["a-box", "a-plane", "a-text", "a-plane"]);

    // Large frame: 2.7 x 2.0 around a 2.5 x 1.8 picture.
    let frame = kids[0];
    assert_eq!(scene.attribute(&frame, "width").unwrap(), "2.7");
    assert_eq!(scene.attribute(&frame, "height").unwrap(), "2");
    assert_eq!(scene.attribute(&frame, "depth").unwrap(), "0.1");
    let image = kids[1];
    assert_eq!(scene.attribute(&image, "width").unwrap(), "2.5");
    assert_eq!(scene.attribute(&image, "height").unwrap(), "1.8");
    assert_eq!(
        scene.attribute(&image, "material").unwrap(),
        "src: assets/is.jpg; roughness: 0.1;"
    );

    let label = kids[3];
    assert_eq!(scene.attribute(&label, "position").unwrap(), "0 -1.4 0.02");
    let label_text = scene.children(label)[0];
    assert_eq!(scene.tag(label_text), "a-text");
    assert_eq!(
        scene.attribute(&label_text, "value").unwrap(),
        "\nIsaac Newton, 1643 - 1727"
    );
}

#[test]
fn attached_data_round_trips_from_the_scene() {
    let mut scene = MemoryScene::with_gallery_page();
    let catalog = Catalog::builtin().unwrap();
    let nodes = build_artworks(&mut scene, catalog.artworks(), &WallTable::default()).unwrap();
    for n in &nodes {
        let payload = scene.attribute(n, ARTWORK_DATA_ATTR).unwrap();
        let record = ArtworkRecord::from_attribute(&scene.describe(n), &payload).unwrap();
        assert_eq!(Some(&record), catalog.get(&record.id));
        assert_eq!(record.to_attribute(), payload);
    }
}

#[test]
fn missing_container_aborts_before_creating_nodes() {
    common::init_logs();
    let mut scene = MemoryScene::new();
    scene.add_element("a-scene", "museum-scene");
    let before = scene.node_count();
    let catalog = Catalog::builtin().unwrap();
    let err = build_artworks(&mut scene, catalog.artworks(), &WallTable::default()).unwrap_err();
    assert!(matches!(err, GalleryError::MissingAnchor(ARTWORKS_CONTAINER_SELECTOR)));
    assert_eq!(scene.node_count(), before);
}

#[test]
fn artworks_on_unconfigured_walls_are_omitted() {
    let mut scene = MemoryScene::with_gallery_page();
    let artworks = vec![
        artwork("kept", Wall::North, FrameSize::Small),
        artwork("dropped", Wall::South, FrameSize::Small),
    ];
    let walls = WallTable::default().without(Wall::South);
    let nodes = build_artworks(&mut scene, &artworks, &walls).unwrap();
    assert_eq!(nodes.len(), 1);
    assert!(scene.query("#artwork-kept").is_some());
    assert!(scene.query("#artwork-dropped").is_none());
}

#[test]
fn host_failure_omits_only_the_affected_artwork() {
    common::init_logs();
    let catalog = Catalog::builtin().unwrap();
    // Six nodes per artwork: the 8th creation is the second artwork's frame.
    let mut scene = FailingScene::new(MemoryScene::with_gallery_page(), 8);
    let nodes = build_artworks(&mut scene, catalog.artworks(), &WallTable::default()).unwrap();

    assert_eq!(nodes.len(), catalog.len() - 1);
    let container = scene.query(ARTWORKS_CONTAINER_SELECTOR).unwrap();
    assert_eq!(scene.inner.children(container), nodes.as_slice());
    let ids: Vec<String> = nodes
        .iter()
        .map(|n| scene.attribute(n, "id").unwrap())
        .collect();
    assert!(!ids.contains(&"artwork-scream".to_string()), "{ids:?}");
    assert!(ids.contains(&"artwork-starry-night".to_string()));
}

#[test]
fn gallery_stays_interactive_after_a_host_failure() {
    common::init_logs();
    let mut scene = FailingScene::new(MemoryScene::with_gallery_page(), 8);
    let mut g = Gallery::new(Catalog::builtin().unwrap(), GalleryConfig::default());
    g.attach(&mut scene);
    g.handle(&mut scene, GalleryEvent::Start);
    let until = scene.inner.now() + Duration::from_millis(LOADING_DELAY_MS);
    while let Some(handle) = scene.inner.pop_due(until) {
        g.handle(&mut scene, GalleryEvent::Timer(handle));
    }

    assert_eq!(g.lifecycle().phase(), LifecyclePhase::Ready);
    assert_eq!(g.artwork_nodes().len(), 5);
    let camera = scene.query(CAMERA_SELECTOR).unwrap();
    assert!(scene
        .inner
        .is_subscribed(camera, HostEvent::RaycasterIntersection));

    let first = g.artwork_nodes()[0];
    g.handle(&mut scene, GalleryEvent::RayIntersected(first));
    g.handle(&mut scene, GalleryEvent::Click);
    assert!(g.interaction().shown_artwork().is_some());
}
