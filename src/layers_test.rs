use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::recorder::{DrawCommand, RecordingContext};

type CallLog = Rc<RefCell<Vec<&'static str>>>;

/// Layer that logs its name and paints a marker rectangle.
struct Marker {
    name: &'static str,
    log: CallLog,
}

impl Layer for Marker {
    fn draw_all(&self, ctx: &mut dyn DrawContext, _viewport: &Viewport) -> Result<(), DrawError> {
        self.log.borrow_mut().push(self.name);
        ctx.fill_rect(0.0, 0.0, 1.0, 1.0);
        Ok(())
    }
}

struct Broken;

impl Layer for Broken {
    fn draw_all(&self, _ctx: &mut dyn DrawContext, _viewport: &Viewport) -> Result<(), DrawError> {
        Err(DrawError::Layer("walls data unavailable".into()))
    }
}

fn marker(name: &'static str, log: &CallLog) -> Box<dyn Layer> {
    Box::new(Marker { name, log: Rc::clone(log) })
}

// --- LayerSlot ---

#[test]
fn slots_are_declared_in_draw_order() {
    let mut sorted = LayerSlot::ALL;
    sorted.sort();
    assert_eq!(sorted, LayerSlot::ALL);
    assert_eq!(LayerSlot::ALL[0], LayerSlot::Container);
    assert_eq!(LayerSlot::ALL[5], LayerSlot::Roofing);
}

#[test]
fn slot_names_parse_case_insensitively() {
    assert_eq!("walls".parse::<LayerSlot>().unwrap(), LayerSlot::Walls);
    assert_eq!("Roofing".parse::<LayerSlot>().unwrap(), LayerSlot::Roofing);
    assert_eq!(" doors ".parse::<LayerSlot>().unwrap(), LayerSlot::Doors);
}

#[test]
fn unknown_slot_name_is_rejected() {
    let err = "chimney".parse::<LayerSlot>();
    assert!(matches!(err, Err(RenderError::UnknownLayer(name)) if name == "chimney"));
}

#[test]
fn slot_display_round_trips_through_parse() {
    for slot in LayerSlot::ALL {
        assert_eq!(slot.to_string().parse::<LayerSlot>().unwrap(), slot);
    }
}

// --- Registry ---

#[test]
fn empty_registry_draws_nothing() {
    let registry = LayerRegistry::new();
    let mut ctx = RecordingContext::new();
    assert_eq!(registry.draw_all(&mut ctx, &Viewport::default()), 0);
    assert!(ctx.commands().is_empty());
}

#[test]
fn layers_draw_in_slot_order_not_registration_order() {
    let log = CallLog::default();
    let mut registry = LayerRegistry::new();
    registry.register(LayerSlot::Roofing, marker("roofing", &log));
    registry.register(LayerSlot::Container, marker("container", &log));
    registry.register(LayerSlot::Windows, marker("windows", &log));
    registry.register(LayerSlot::Walls, marker("walls", &log));

    let mut ctx = RecordingContext::new();
    assert_eq!(registry.draw_all(&mut ctx, &Viewport::default()), 4);
    assert_eq!(*log.borrow(), vec!["container", "walls", "windows", "roofing"]);
}

#[test]
fn order_is_stable_across_frames() {
    let log = CallLog::default();
    let mut registry = LayerRegistry::new();
    registry.register(LayerSlot::Doors, marker("doors", &log));
    registry.register(LayerSlot::Foundation, marker("foundation", &log));

    let mut ctx = RecordingContext::new();
    registry.draw_all(&mut ctx, &Viewport::default());
    registry.draw_all(&mut ctx, &Viewport::default());
    assert_eq!(*log.borrow(), vec!["doors", "foundation", "doors", "foundation"]);
}

#[test]
fn register_replaces_existing_slot() {
    let log = CallLog::default();
    let mut registry = LayerRegistry::new();
    assert!(registry.register(LayerSlot::Walls, marker("old", &log)).is_none());
    assert!(registry.register(LayerSlot::Walls, marker("new", &log)).is_some());
    assert_eq!(registry.len(), 1);

    registry.draw_all(&mut RecordingContext::new(), &Viewport::default());
    assert_eq!(*log.borrow(), vec!["new"]);
}

#[test]
fn register_named_resolves_slot() {
    let log = CallLog::default();
    let mut registry = LayerRegistry::new();
    registry.register_named("Windows", marker("windows", &log)).unwrap();
    assert!(registry.contains(LayerSlot::Windows));
    assert!(registry.register_named("garage", marker("garage", &log)).is_err());
    assert_eq!(registry.slots(), vec![LayerSlot::Windows]);
}

#[test]
fn unregistered_slot_is_skipped_without_call() {
    let log = CallLog::default();
    let mut registry = LayerRegistry::new();
    registry.register(LayerSlot::Container, marker("container", &log));
    registry.register(LayerSlot::Walls, marker("walls", &log));
    assert!(registry.unregister(LayerSlot::Walls).is_some());
    assert!(registry.unregister(LayerSlot::Walls).is_none());

    registry.draw_all(&mut RecordingContext::new(), &Viewport::default());
    assert_eq!(*log.borrow(), vec!["container"]);
}

#[test]
fn failing_layer_is_isolated() {
    let log = CallLog::default();
    let mut registry = LayerRegistry::new();
    registry.register(LayerSlot::Container, marker("container", &log));
    registry.register(LayerSlot::Walls, Box::new(Broken));
    registry.register(LayerSlot::Windows, marker("windows", &log));

    let mut ctx = RecordingContext::new();
    assert_eq!(registry.draw_all(&mut ctx, &Viewport::default()), 2);
    assert_eq!(*log.borrow(), vec!["container", "windows"]);
    assert_eq!(ctx.commands().iter().filter(|c| matches!(c, DrawCommand::FillRect { .. })).count(), 2);
}

#[test]
fn closures_are_layers() {
    let mut registry = LayerRegistry::new();
    registry.register(
        LayerSlot::Foundation,
        Box::new(|ctx: &mut dyn DrawContext, viewport: &Viewport| -> Result<(), DrawError> {
            ctx.fill_rect(0.0, 0.0, viewport.zoom(), viewport.zoom());
            Ok(())
        }),
    );
    let mut ctx = RecordingContext::new();
    registry.draw_all(&mut ctx, &Viewport::new(2.0, 0.0, 0.0));
    assert_eq!(ctx.commands(), &[DrawCommand::FillRect { x: 0.0, y: 0.0, width: 2.0, height: 2.0 }]);
}

#[test]
fn debug_lists_occupied_slots() {
    let mut registry = LayerRegistry::new();
    registry.register(LayerSlot::Doors, Box::new(Broken));
    assert!(format!("{registry:?}").contains("Doors"));
}
