//! Central panel UI module: draws the room grid, the stored connections and
//! the line being dragged, and forwards pointer input to the editor.

use std::sync::Arc;
use parking_lot::RwLock;
use eframe::egui::{
    self, Align2, Color32, Context, FontId, Painter, Pos2, Rect, Sense, Stroke, Vec2,
};

use crate::document::Document;
use crate::editor::Editor;
use crate::map::GridPos;
use crate::utils::geometry::{Point2D, TileGeometry};

/// The `CentralPanel` struct provides the main viewport: one white square per
/// room, with the room name drawn inside.
pub struct CentralPanel {
    editor: Arc<RwLock<Editor>>,
}

impl CentralPanel {
    pub fn new(editor: Arc<RwLock<Editor>>) -> Self {
        Self { editor }
    }

    /// Called each frame to update the central panel.
    pub fn update(&mut self, ctx: &Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::both().show(ui, |ui| {
                let (size, geometry) = {
                    let editor = self.editor.read();
                    let geometry = editor.geometry();
                    let size = match editor.document() {
                        Some(doc) => Vec2::new(
                            doc.width() as f32 * geometry.tile_size,
                            doc.height() as f32 * geometry.tile_size,
                        ),
                        None => return,
                    };
                    (size, geometry)
                };

                let (response, painter) = ui.allocate_painter(size, Sense::click_and_drag());
                let origin = response.rect.min;

                self.handle_input(ui, &response, origin);
                self.draw(&painter, &geometry, origin);
            });
        });
    }

    // ============================================================
    // Input
    // ============================================================

    fn handle_input(&self, ui: &egui::Ui, response: &egui::Response, origin: Pos2) {
        let (pos, pressed, down, released) = ui.input(|input| {
            (
                input.pointer.interact_pos(),
                input.pointer.primary_pressed(),
                input.pointer.primary_down(),
                input.pointer.primary_released(),
            )
        });

        let mut editor = self.editor.write();
        let hover = if response.hovered() { pos } else { None };
        editor.pointer_hovered(hover.map(|p| to_canvas(p, origin)));

        let Some(pos) = pos else {
            if released {
                editor.pointer_release_lost();
            }
            return;
        };
        let point = to_canvas(pos, origin);

        if pressed && response.hovered() && !editor.is_modal_open() {
            editor.pointer_pressed(point);
        } else if down {
            editor.pointer_dragged(point);
        }
        if released {
            editor.pointer_released(point);
        }
    }

    // ============================================================
    // Drawing
    // ============================================================

    fn draw(&self, painter: &Painter, geometry: &TileGeometry, origin: Pos2) {
        let editor = self.editor.read();
        let Some(doc) = editor.document() else {
            return;
        };

        self.draw_rooms(painter, doc, geometry, origin, editor.hovered_cell());
        self.draw_connections(painter, doc, geometry, origin);

        if let Some((from, to)) = editor.interaction().preview_line(geometry) {
            painter.arrow(
                to_screen(from, origin),
                to_screen(to, origin) - to_screen(from, origin),
                Stroke::new(2.0, Color32::DARK_GRAY),
            );
        }
        if let Some(pending) = editor.interaction().pending() {
            painter.arrow(
                to_screen(pending.start, origin),
                to_screen(pending.end, origin) - to_screen(pending.start, origin),
                Stroke::new(2.0, Color32::from_rgb(230, 120, 0)),
            );
        }
    }

    fn draw_rooms(
        &self,
        painter: &Painter,
        doc: &Document,
        geometry: &TileGeometry,
        origin: Pos2,
        hovered: Option<GridPos>,
    ) {
        let outline = Stroke::new(1.0, Color32::BLACK);
        for (pos, room) in doc.rooms() {
            let min = to_screen(geometry.cell_origin(pos), origin);
            let rect = Rect::from_min_size(min, Vec2::splat(geometry.tile_size));
            let fill = if hovered == Some(pos) {
                Color32::from_rgb(235, 240, 255)
            } else {
                Color32::WHITE
            };
            painter.rect(rect, 0.0, fill, outline);

            if !room.name.is_empty() {
                painter.text(
                    to_screen(geometry.cell_center(pos), origin),
                    Align2::CENTER_CENTER,
                    &room.name,
                    FontId::proportional(12.0),
                    Color32::BLACK,
                );
            }
        }
    }

    /// Draws one arrow per egress, anchored the same way a dragged line is.
    fn draw_connections(
        &self,
        painter: &Painter,
        doc: &Document,
        geometry: &TileGeometry,
        origin: Pos2,
    ) {
        let stroke = Stroke::new(1.5, Color32::from_rgb(40, 40, 160));
        for (pos, room) in doc.rooms() {
            for egress in &room.egresses {
                let start = geometry.nearest_anchor(pos, geometry.cell_center(egress.target));
                let end = geometry.nearest_anchor(egress.target, start);
                let from = to_screen(start, origin);
                painter.arrow(from, to_screen(end, origin) - from, stroke);
            }
        }
    }
}

fn to_canvas(pos: Pos2, origin: Pos2) -> Point2D {
    Point2D::new(pos.x - origin.x, pos.y - origin.y)
}

fn to_screen(point: Point2D, origin: Pos2) -> Pos2 {
    Pos2::new(origin.x + point.x, origin.y + point.y)
}
