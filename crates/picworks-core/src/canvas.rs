//! Project canvas: display list and pointer-driven drawing.

use crate::config::CanvasConfig;
use crate::element::{EditError, EditResult, Element, ElementId};
use crate::grid::GridTile;
use crate::input::{MouseButton, PointerEvent};
use crate::project::{Background, Project, ProjectResult};
use crate::shapes::{Shape, ShapeKind};
use crate::tools::ToolKind;
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The elements of a canvas in paint order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayList {
    /// All elements, keyed by ID.
    elements: HashMap<ElementId, Element>,
    /// Insertion order (back to front among equal z-values).
    z_order: Vec<ElementId>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an element. Returns false if it is already listed.
    pub fn add(&mut self, element: Element) -> bool {
        let id = element.id();
        if self.elements.contains_key(&id) {
            return false;
        }
        self.z_order.push(id);
        self.elements.insert(id, element);
        true
    }

    /// Remove an element.
    pub fn remove(&mut self, id: ElementId) -> Option<Element> {
        self.z_order.retain(|&element_id| element_id != id);
        self.elements.remove(&id)
    }

    /// Clear all elements.
    pub fn clear(&mut self) {
        self.elements.clear();
        self.z_order.clear();
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(&id)
    }

    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.get_mut(&id)
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.elements.contains_key(&id)
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Elements back to front: by z-value, then by insertion order.
    pub fn elements_ordered(&self) -> Vec<&Element> {
        let mut ordered: Vec<&Element> = self
            .z_order
            .iter()
            .filter_map(|id| self.elements.get(id))
            .collect();
        // Stable sort keeps insertion order within a layer.
        ordered.sort_by_key(|element| element.z_value());
        ordered
    }

    /// Get the bounding box of all elements.
    pub fn bounds(&self) -> Option<Rect> {
        self.elements
            .values()
            .map(Element::bounds)
            .reduce(|acc, bounds| acc.union(bounds))
    }

    /// Elements hit by a point, front to back.
    pub fn elements_at_point(&self, point: Point, tolerance: f64) -> Vec<ElementId> {
        self.elements_ordered()
            .into_iter()
            .rev()
            .filter(|element| element.hit_test(point, tolerance))
            .map(Element::id)
            .collect()
    }

    /// Elements whose bounds intersect a rectangle, back to front.
    pub fn elements_in_rect(&self, rect: Rect) -> Vec<ElementId> {
        self.elements_ordered()
            .into_iter()
            .filter(|element| rect.intersect(element.bounds().inflate(1.0, 1.0)).area() > 0.0)
            .map(Element::id)
            .collect()
    }
}

/// Notifications for the host, collected until [`Canvas::poll_events`].
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasEvent {
    /// An element started (`true`) or stopped (`false`) being drawn.
    DrawingChanged(bool),
    /// The event should continue to the host's default scene handling.
    Forwarded(PointerEvent),
    /// The scene needs repainting.
    RedrawRequested,
    /// The grid overlay was shown or hidden.
    GridChanged(bool),
}

/// Pointer-driven drawing on one project.
#[derive(Debug, Clone)]
pub struct Canvas {
    project: Project,
    config: CanvasConfig,
    display_list: DisplayList,
    /// Tool chosen by the host.
    tool: ToolKind,
    /// Element built for the current tool that no press has taken yet.
    pending: Option<Element>,
    /// Element being drawn; it lives in the display list.
    current: Option<ElementId>,
    grid_visible: bool,
    grid: Option<GridTile>,
    antialiasing: bool,
    layer_index: i32,
    events: Vec<CanvasEvent>,
}

impl Canvas {
    /// Create a canvas for a project.
    ///
    /// Fails if the project has no area or no unit size.
    pub fn new(project: Project, config: CanvasConfig) -> ProjectResult<Self> {
        project.validate()?;
        log::debug!(
            "Creating canvas for '{}' ({}x{})",
            project.name,
            project.width,
            project.height
        );
        Ok(Self {
            antialiasing: config.antialiasing,
            layer_index: config.layer_index,
            project,
            config,
            display_list: DisplayList::new(),
            tool: ToolKind::None,
            pending: None,
            current: None,
            grid_visible: false,
            grid: None,
            events: Vec::new(),
        })
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    pub fn background(&self) -> &Background {
        &self.project.background
    }

    pub fn scene_rect(&self) -> Rect {
        self.project.scene_rect()
    }

    pub fn display_list(&self) -> &DisplayList {
        &self.display_list
    }

    /// Mutable access to a listed element, e.g. to fill in text content.
    pub fn element_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.display_list.get_mut(id)
    }

    pub fn tool(&self) -> ToolKind {
        self.tool
    }

    /// Set the current tool.
    pub fn set_tool(&mut self, tool: ToolKind) {
        if tool == self.tool {
            return;
        }
        log::info!("Tool changed: {:?} -> {:?}", self.tool, tool);
        self.tool = tool;
        if self.pending.take().is_some() {
            log::debug!("Dropped unregistered element for previous tool");
        }
    }

    /// Set the current tool from a host action identifier.
    pub fn set_tool_by_action(&mut self, action_id: &str) {
        let tool = ToolKind::from_action_id(action_id);
        if tool == ToolKind::None {
            log::debug!("Action '{}' selects no drawing tool", action_id);
        }
        self.set_tool(tool);
    }

    pub fn antialiasing(&self) -> bool {
        self.antialiasing
    }

    /// Antialiasing for shapes created from now on.
    pub fn set_antialiasing(&mut self, antialiasing: bool) {
        self.antialiasing = antialiasing;
    }

    pub fn layer_index(&self) -> i32 {
        self.layer_index
    }

    /// Z-value for shapes created from now on. Never advanced automatically.
    pub fn set_layer_index(&mut self, layer_index: i32) {
        self.layer_index = layer_index;
    }

    /// The element being drawn, if a gesture is in progress.
    pub fn current_element(&self) -> Option<&Element> {
        self.current.and_then(|id| self.display_list.get(id))
    }

    pub fn current_element_id(&self) -> Option<ElementId> {
        self.current
    }

    pub fn is_drawing(&self) -> bool {
        self.current.is_some()
    }

    /// False only while an element built for the current tool waits for its
    /// first left press.
    pub fn is_current_registered(&self) -> bool {
        self.pending.is_none()
    }

    /// Kind of the element waiting for a left press.
    pub fn pending_kind(&self) -> Option<ShapeKind> {
        self.pending.as_ref().map(Element::kind)
    }

    /// Dispatch a raw pointer event.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down { position, button } => self.on_pointer_down(position, button),
            PointerEvent::Move { position } => self.on_pointer_move(position),
            PointerEvent::Up { position, button } => self.on_pointer_up(position, button),
            PointerEvent::Scroll { .. } => self.events.push(CanvasEvent::Forwarded(event)),
        }
    }

    /// Pointer pressed.
    pub fn on_pointer_down(&mut self, position: Point, button: MouseButton) {
        if let Some(id) = self.current {
            log::debug!("Press at {:?} ignored while element {} is being drawn", position, id);
        } else {
            self.resolve_pending();
            if button == MouseButton::Left {
                self.start_element(position);
            }
        }
        self.events
            .push(CanvasEvent::Forwarded(PointerEvent::Down { position, button }));
    }

    /// Pointer moved.
    pub fn on_pointer_move(&mut self, position: Point) {
        if let Some(id) = self.current {
            match self.display_list.get_mut(id) {
                Some(element) => {
                    if let Err(err) = element.update(position) {
                        report_misuse(err);
                    }
                }
                None => {
                    log::warn!("Element {} left the display list mid-gesture", id);
                    self.finish_gesture();
                }
            }
        }
        self.events
            .push(CanvasEvent::Forwarded(PointerEvent::Move { position }));
    }

    /// Pointer released.
    pub fn on_pointer_up(&mut self, position: Point, button: MouseButton) {
        if let Some(id) = self.current {
            if let Some(element) = self.display_list.get_mut(id) {
                match element.end(position) {
                    Ok(()) => log::debug!("Finalized {:?} element {}", element.kind(), id),
                    Err(err) => report_misuse(err),
                }
            }
            self.finish_gesture();
        }
        self.events.push(CanvasEvent::RedrawRequested);
        self.events
            .push(CanvasEvent::Forwarded(PointerEvent::Up { position, button }));
    }

    pub fn grid_visible(&self) -> bool {
        self.grid_visible
    }

    /// The grid tile, present while the grid is visible.
    pub fn grid(&self) -> Option<&GridTile> {
        self.grid.as_ref()
    }

    /// Show or hide the alignment grid.
    pub fn set_grid_visible(&mut self, visible: bool) {
        self.grid_visible = visible;
        self.grid = if visible {
            Some(GridTile::generate(self.project.unit_size, self.config.grid_color))
        } else {
            None
        };
        log::debug!("Grid {}", if visible { "shown" } else { "hidden" });
        self.events.push(CanvasEvent::GridChanged(visible));
    }

    /// Remove an element. Removing the element being drawn ends the gesture.
    pub fn remove_element(&mut self, id: ElementId) -> Option<Element> {
        if self.current == Some(id) {
            self.finish_gesture();
        }
        self.display_list.remove(id)
    }

    /// Drain pending notifications.
    pub fn poll_events(&mut self) -> Vec<CanvasEvent> {
        std::mem::take(&mut self.events)
    }

    fn resolve_pending(&mut self) {
        if self.pending.is_some() {
            return;
        }
        self.pending = Shape::for_tool(self.tool, &self.config).map(Element::new);
        if let Some(element) = &self.pending {
            log::debug!("Built {:?} element {}", element.kind(), element.id());
        }
    }

    fn start_element(&mut self, position: Point) {
        let Some(mut element) = self.pending.take() else {
            return;
        };
        if let Err(err) = prepare(&mut element, self.antialiasing, self.layer_index, position) {
            report_misuse(err);
        }
        let id = element.id();
        let kind = element.kind();
        if self.display_list.add(element) {
            self.current = Some(id);
            self.events.push(CanvasEvent::DrawingChanged(true));
            log::debug!("Started {:?} element {} at {:?}", kind, id, position);
        }
    }

    fn finish_gesture(&mut self) {
        if self.current.take().is_some() {
            self.events.push(CanvasEvent::DrawingChanged(false));
        }
    }
}

fn prepare(
    element: &mut Element,
    antialiasing: bool,
    z_value: i32,
    position: Point,
) -> EditResult<()> {
    element.set_antialiasing(antialiasing)?;
    element.set_z_value(z_value)?;
    element.mark_registered()?;
    element.begin(position)
}

// The canvas state machine never reaches these; treat one as a bug.
fn report_misuse(err: EditError) {
    log::error!("Element editing protocol violated: {}", err);
    if cfg!(debug_assertions) {
        panic!("element editing protocol violated: {err}");
    }
}
