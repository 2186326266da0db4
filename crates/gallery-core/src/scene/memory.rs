use super::{HostEvent, Primitive, SceneHandle, TimerHandle};
use std::collections::BTreeMap;
use std::time::Duration;

/// Index of a node inside a [`MemoryScene`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MemoryNode(pub usize);

#[derive(Clone, Debug, Default)]
struct NodeData {
    tag: String,
    attributes: BTreeMap<String, String>,
    classes: Vec<String>,
    children: Vec<MemoryNode>,
    parent: Option<MemoryNode>,
}

/// Scene graph kept entirely in memory with a virtual clock.
///
/// Timers never fire on their own: the owner pulls due handles with
/// [`MemoryScene::pop_due`] and feeds them back as timer events.
#[derive(Debug, Default)]
pub struct MemoryScene {
    nodes: Vec<NodeData>,
    subscriptions: Vec<(MemoryNode, HostEvent)>,
    timers: BTreeMap<TimerHandle, Duration>,
    next_timer: u64,
    now: Duration,
    loaded: bool,
    render_running: bool,
    resize_requests: usize,
}

impl MemoryScene {
    pub fn new() -> Self {
        Self {
            loaded: true,
            render_running: true,
            ..Self::default()
        }
    }

    /// A scene holding every node the gallery page normally provides.
    pub fn with_gallery_page() -> Self {
        let mut scene = Self::new();
        let root = scene.add_element("a-scene", "museum-scene");
        for (tag, id) in [
            ("a-entity", "artworks-container"),
            ("a-entity", "main-camera"),
            ("a-entity", "main-cursor"),
            ("a-entity", "welcome-panel"),
            ("a-entity", "description-panel"),
            ("a-text", "artwork-title"),
            ("a-text", "artwork-info"),
            ("a-text", "artwork-description"),
        ] {
            let n = scene.add_element(tag, id);
            scene.append_child(&root, &n);
        }
        let loading = scene.add_element("div", "loading-overlay");
        scene.add_class(&loading, "hidden");
        scene.add_element("div", "ui-overlay");
        scene
    }

    pub fn add_element(&mut self, tag: &str, id: &str) -> MemoryNode {
        let node = self.push(tag);
        self.set_attribute(&node, "id", id);
        node
    }

    fn push(&mut self, tag: &str) -> MemoryNode {
        self.nodes.push(NodeData {
            tag: tag.to_string(),
            ..NodeData::default()
        });
        MemoryNode(self.nodes.len() - 1)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn tag(&self, node: MemoryNode) -> &str {
        &self.nodes[node.0].tag
    }

    pub fn children(&self, node: MemoryNode) -> &[MemoryNode] {
        &self.nodes[node.0].children
    }

    pub fn parent(&self, node: MemoryNode) -> Option<MemoryNode> {
        self.nodes[node.0].parent
    }

    pub fn is_subscribed(&self, node: MemoryNode, event: HostEvent) -> bool {
        self.subscriptions.contains(&(node, event))
    }

    pub fn subscription_count(&self) -> usize {
        self.subscriptions.len()
    }

    pub fn set_loaded(&mut self, loaded: bool) {
        self.loaded = loaded;
    }

    pub fn render_running(&self) -> bool {
        self.render_running
    }

    pub fn resize_requests(&self) -> usize {
        self.resize_requests
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Removes and returns the earliest timer due at or before `until`,
    /// moving the clock to its deadline.
    pub fn pop_due(&mut self, until: Duration) -> Option<TimerHandle> {
        let (&handle, &deadline) = self
            .timers
            .iter()
            .filter(|(_, d)| **d <= until)
            .min_by_key(|(h, d)| (**d, **h))?;
        self.timers.remove(&handle);
        self.now = self.now.max(deadline);
        Some(handle)
    }

    pub fn set_now(&mut self, now: Duration) {
        self.now = self.now.max(now);
    }
}

impl SceneHandle for MemoryScene {
    type Node = MemoryNode;

    fn query(&self, selector: &str) -> Option<MemoryNode> {
        let matches = |n: &NodeData| {
            if let Some(id) = selector.strip_prefix('#') {
                n.attributes.get("id").map(String::as_str) == Some(id)
            } else if let Some(class) = selector.strip_prefix('.') {
                n.classes.iter().any(|c| c == class)
            } else {
                n.tag == selector
            }
        };
        self.nodes.iter().position(matches).map(MemoryNode)
    }

    fn create(&mut self, primitive: Primitive) -> crate::Result<MemoryNode> {
        Ok(self.push(primitive.tag()))
    }

    fn set_attribute(&mut self, node: &MemoryNode, name: &str, value: &str) {
        self.nodes[node.0]
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    fn attribute(&self, node: &MemoryNode, name: &str) -> Option<String> {
        self.nodes[node.0].attributes.get(name).cloned()
    }

    fn add_class(&mut self, node: &MemoryNode, class: &str) {
        let classes = &mut self.nodes[node.0].classes;
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_string());
        }
    }

    fn remove_class(&mut self, node: &MemoryNode, class: &str) {
        self.nodes[node.0].classes.retain(|c| c != class);
    }

    fn has_class(&self, node: &MemoryNode, class: &str) -> bool {
        self.nodes[node.0].classes.iter().any(|c| c == class)
    }

    fn append_child(&mut self, parent: &MemoryNode, child: &MemoryNode) {
        if let Some(old) = self.nodes[child.0].parent.take() {
            self.nodes[old.0].children.retain(|c| c != child);
        }
        self.nodes[parent.0].children.push(*child);
        self.nodes[child.0].parent = Some(*parent);
    }

    fn describe(&self, node: &MemoryNode) -> String {
        self.attribute(node, "id")
            .unwrap_or_else(|| format!("<{}#{}>", self.nodes[node.0].tag, node.0))
    }

    fn subscribe(&mut self, node: &MemoryNode, event: HostEvent) {
        if !self.is_subscribed(*node, event) {
            self.subscriptions.push((*node, event));
        }
    }

    fn set_timeout(&mut self, delay: Duration) -> TimerHandle {
        self.next_timer += 1;
        let handle = TimerHandle(self.next_timer);
        self.timers.insert(handle, self.now + delay);
        handle
    }

    fn clear_timeout(&mut self, handle: TimerHandle) {
        self.timers.remove(&handle);
    }

    fn is_loaded(&self, _scene: &MemoryNode) -> bool {
        self.loaded
    }

    fn set_render_loop(&mut self, _scene: &MemoryNode, running: bool) {
        self.render_running = running;
    }

    fn resize_viewport(&mut self, _scene: &MemoryNode) {
        self.resize_requests += 1;
    }
}
