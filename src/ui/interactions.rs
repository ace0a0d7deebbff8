// src/ui/interactions.rs

use gtk4::glib;
use gtk4::prelude::*;
use gtk4::{DrawingArea, EventControllerMotion, EventControllerScroll, EventControllerScrollFlags};
use std::cell::RefCell;
use std::rc::Rc;

use crate::rendering::AtomScene;

/// Wire pointer input on the atom canvas to the scene's camera. The motion
/// handler writes the yaw/pitch that the next frame's projection reads;
/// both run on the GTK main loop, so event order is paint order.
pub fn setup_atom_view(area: &DrawingArea, scene: Rc<RefCell<AtomScene>>) {
  // 1. POINTER -> CAMERA ROTATION
  let motion = EventControllerMotion::new();
  let s = scene.clone();
  motion.connect_motion(move |controller, x, y| {
    let widget = controller.widget();
    let w = widget.width() as f64;
    let h = widget.height() as f64;
    s.borrow_mut().camera.set_from_pointer(x, y, w, h);
  });
  area.add_controller(motion);

  // 2. SCROLL (ZOOM)
  let scroll = EventControllerScroll::new(EventControllerScrollFlags::VERTICAL);
  let s = scene.clone();
  scroll.connect_scroll(move |_, _, dy| {
    s.borrow_mut().camera.zoom(dy);
    glib::Propagation::Stop
  });
  area.add_controller(scroll);
}
