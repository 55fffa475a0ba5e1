use std::{
    ffi::CStr,
    os::raw::{c_double, c_float, c_int},
};

use dxportlib_sys::consts;

use crate::{DxLib, convert::bool_to_flag, defaults};

handle! {
    /// Image loaded or derived by the native library.
    pub struct GraphHandle;
}

impl GraphHandle {
    /// Placeholder for "no graph", shares its value with [`Screen::TempFront`](crate::Screen).
    pub const NONE: Self = Self::from_raw(consts::DX_NONE_GRAPH);
}

/// A color in the native pixel format, as packed by [`DxLib::get_color`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Color(c_int);

impl Color {
    #[must_use]
    pub const fn from_raw(raw: c_int) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> c_int {
        self.0
    }
}

raw_enum! {
    pub enum BlendMode / InvalidRawBlendMode {
        NoBlend = consts::DX_BLENDMODE_NOBLEND,
        Alpha = consts::DX_BLENDMODE_ALPHA,
        Add = consts::DX_BLENDMODE_ADD,
        Sub = consts::DX_BLENDMODE_SUB,
        Mul = consts::DX_BLENDMODE_MUL,
        Sub2 = consts::DX_BLENDMODE_SUB2,
        DestColor = consts::DX_BLENDMODE_DESTCOLOR,
        InvDestColor = consts::DX_BLENDMODE_INVDESTCOLOR,
        InvSrc = consts::DX_BLENDMODE_INVSRC,
        MulA = consts::DX_BLENDMODE_MULA,
        AlphaX4 = consts::DX_BLENDMODE_ALPHA_X4,
        AddX4 = consts::DX_BLENDMODE_ADD_X4,
        SrcColor = consts::DX_BLENDMODE_SRCCOLOR,
        HalfAdd = consts::DX_BLENDMODE_HALF_ADD,
        Sub1 = consts::DX_BLENDMODE_SUB1,
        PmaAlpha = consts::DX_BLENDMODE_PMA_ALPHA,
        PmaAdd = consts::DX_BLENDMODE_PMA_ADD,
        PmaSub = consts::DX_BLENDMODE_PMA_SUB,
        PmaInvSrc = consts::DX_BLENDMODE_PMA_INVSRC,
        PmaAlphaX4 = consts::DX_BLENDMODE_PMA_ALPHA_X4,
        PmaAddX4 = consts::DX_BLENDMODE_PMA_ADD_X4,
    }
}

fn turn_flag(turn: Option<bool>) -> c_int {
    bool_to_flag(turn.unwrap_or(defaults::TURN))
}

#[allow(clippy::must_use_candidate)]
impl DxLib {
    #[must_use]
    pub fn load_graph(&self, name: &CStr) -> GraphHandle {
        GraphHandle::from_raw(unsafe { (self.api.graph.load_graph)(name.as_ptr()) })
    }

    pub fn delete_graph(&self, graph: GraphHandle) -> c_int {
        unsafe { (self.api.graph.delete_graph)(graph.raw()) }
    }

    /// Deletes every graph.
    pub fn init_graph(&self) -> c_int {
        unsafe { (self.api.graph.init_graph)() }
    }

    /// A new handle sharing the pixels of a region of `graph`.
    #[must_use]
    pub fn derivation_graph(
        &self,
        x: c_int,
        y: c_int,
        w: c_int,
        h: c_int,
        graph: GraphHandle,
    ) -> GraphHandle {
        GraphHandle::from_raw(unsafe { (self.api.graph.derivation_graph)(x, y, w, h, graph.raw()) })
    }

    /// Both slots are zeroed before the call.
    pub fn get_graph_size(
        &self,
        graph: GraphHandle,
        width: &mut c_int,
        height: &mut c_int,
    ) -> c_int {
        *width = 0;
        *height = 0;
        unsafe { (self.api.graph.get_graph_size)(graph.raw(), width, height) }
    }

    pub fn set_trans_color(&self, r: c_int, g: c_int, b: c_int) -> c_int {
        unsafe { (self.api.graph.set_trans_color)(r, g, b) }
    }

    /// All three slots are zeroed before the call.
    pub fn get_trans_color(&self, r: &mut c_int, g: &mut c_int, b: &mut c_int) -> c_int {
        *r = 0;
        *g = 0;
        *b = 0;
        unsafe { (self.api.graph.get_trans_color)(r, g, b) }
    }

    pub fn set_use_trans_color(&self, enabled: bool) -> c_int {
        unsafe { (self.api.graph.set_use_trans_color)(bool_to_flag(enabled)) }
    }

    pub fn draw_pixel(&self, x: c_int, y: c_int, color: Color) -> c_int {
        unsafe { (self.api.graph.draw_pixel)(x, y, color.raw()) }
    }

    /// `thickness` defaults to 1.
    pub fn draw_line(
        &self,
        x1: c_int,
        y1: c_int,
        x2: c_int,
        y2: c_int,
        color: Color,
        thickness: Option<c_int>,
    ) -> c_int {
        let thickness = thickness.unwrap_or(defaults::LINE_THICKNESS);
        unsafe { (self.api.graph.draw_line)(x1, y1, x2, y2, color.raw(), thickness) }
    }

    pub fn draw_line_f(
        &self,
        x1: c_float,
        y1: c_float,
        x2: c_float,
        y2: c_float,
        color: Color,
        thickness: Option<c_int>,
    ) -> c_int {
        let thickness = thickness.unwrap_or(defaults::LINE_THICKNESS);
        unsafe { (self.api.graph.draw_line_f)(x1, y1, x2, y2, color.raw(), thickness) }
    }

    pub fn draw_box(
        &self,
        x1: c_int,
        y1: c_int,
        x2: c_int,
        y2: c_int,
        color: Color,
        fill: bool,
    ) -> c_int {
        unsafe { (self.api.graph.draw_box)(x1, y1, x2, y2, color.raw(), bool_to_flag(fill)) }
    }

    pub fn draw_box_f(
        &self,
        x1: c_float,
        y1: c_float,
        x2: c_float,
        y2: c_float,
        color: Color,
        fill: bool,
    ) -> c_int {
        unsafe { (self.api.graph.draw_box_f)(x1, y1, x2, y2, color.raw(), bool_to_flag(fill)) }
    }

    pub fn draw_fill_box(&self, x1: c_int, y1: c_int, x2: c_int, y2: c_int, color: Color) -> c_int {
        unsafe { (self.api.graph.draw_fill_box)(x1, y1, x2, y2, color.raw()) }
    }

    pub fn draw_fill_box_f(
        &self,
        x1: c_float,
        y1: c_float,
        x2: c_float,
        y2: c_float,
        color: Color,
    ) -> c_int {
        unsafe { (self.api.graph.draw_fill_box_f)(x1, y1, x2, y2, color.raw()) }
    }

    pub fn draw_line_box(&self, x1: c_int, y1: c_int, x2: c_int, y2: c_int, color: Color) -> c_int {
        unsafe { (self.api.graph.draw_line_box)(x1, y1, x2, y2, color.raw()) }
    }

    pub fn draw_line_box_f(
        &self,
        x1: c_float,
        y1: c_float,
        x2: c_float,
        y2: c_float,
        color: Color,
    ) -> c_int {
        unsafe { (self.api.graph.draw_line_box_f)(x1, y1, x2, y2, color.raw()) }
    }

    pub fn draw_circle(&self, x: c_int, y: c_int, r: c_int, color: Color, fill: bool) -> c_int {
        unsafe { (self.api.graph.draw_circle)(x, y, r, color.raw(), bool_to_flag(fill)) }
    }

    pub fn draw_circle_f(
        &self,
        x: c_float,
        y: c_float,
        r: c_float,
        color: Color,
        fill: bool,
    ) -> c_int {
        unsafe { (self.api.graph.draw_circle_f)(x, y, r, color.raw(), bool_to_flag(fill)) }
    }

    pub fn draw_oval(
        &self,
        x: c_int,
        y: c_int,
        rx: c_int,
        ry: c_int,
        color: Color,
        fill: bool,
    ) -> c_int {
        unsafe { (self.api.graph.draw_oval)(x, y, rx, ry, color.raw(), bool_to_flag(fill)) }
    }

    pub fn draw_oval_f(
        &self,
        x: c_float,
        y: c_float,
        rx: c_float,
        ry: c_float,
        color: Color,
        fill: bool,
    ) -> c_int {
        unsafe { (self.api.graph.draw_oval_f)(x, y, rx, ry, color.raw(), bool_to_flag(fill)) }
    }

    pub fn draw_triangle(
        &self,
        [x1, y1]: [c_int; 2],
        [x2, y2]: [c_int; 2],
        [x3, y3]: [c_int; 2],
        color: Color,
        fill: bool,
    ) -> c_int {
        unsafe {
            (self.api.graph.draw_triangle)(x1, y1, x2, y2, x3, y3, color.raw(), bool_to_flag(fill))
        }
    }

    pub fn draw_triangle_f(
        &self,
        [x1, y1]: [c_float; 2],
        [x2, y2]: [c_float; 2],
        [x3, y3]: [c_float; 2],
        color: Color,
        fill: bool,
    ) -> c_int {
        unsafe {
            (self.api.graph.draw_triangle_f)(
                x1,
                y1,
                x2,
                y2,
                x3,
                y3,
                color.raw(),
                bool_to_flag(fill),
            )
        }
    }

    /// Corners are given clockwise from the top left.
    pub fn draw_quadrangle(
        &self,
        [[x1, y1], [x2, y2], [x3, y3], [x4, y4]]: [[c_int; 2]; 4],
        color: Color,
        fill: bool,
    ) -> c_int {
        unsafe {
            (self.api.graph.draw_quadrangle)(
                x1,
                y1,
                x2,
                y2,
                x3,
                y3,
                x4,
                y4,
                color.raw(),
                bool_to_flag(fill),
            )
        }
    }

    pub fn draw_quadrangle_f(
        &self,
        [[x1, y1], [x2, y2], [x3, y3], [x4, y4]]: [[c_float; 2]; 4],
        color: Color,
        fill: bool,
    ) -> c_int {
        unsafe {
            (self.api.graph.draw_quadrangle_f)(
                x1,
                y1,
                x2,
                y2,
                x3,
                y3,
                x4,
                y4,
                color.raw(),
                bool_to_flag(fill),
            )
        }
    }

    /// `blend` enables the graph's alpha channel.
    pub fn draw_graph(&self, x: c_int, y: c_int, graph: GraphHandle, blend: bool) -> c_int {
        unsafe { (self.api.graph.draw_graph)(x, y, graph.raw(), bool_to_flag(blend)) }
    }

    pub fn draw_graph_f(&self, x: c_float, y: c_float, graph: GraphHandle, blend: bool) -> c_int {
        unsafe { (self.api.graph.draw_graph_f)(x, y, graph.raw(), bool_to_flag(blend)) }
    }

    pub fn draw_extend_graph(
        &self,
        x1: c_int,
        y1: c_int,
        x2: c_int,
        y2: c_int,
        graph: GraphHandle,
        blend: bool,
    ) -> c_int {
        unsafe {
            (self.api.graph.draw_extend_graph)(x1, y1, x2, y2, graph.raw(), bool_to_flag(blend))
        }
    }

    pub fn draw_extend_graph_f(
        &self,
        x1: c_float,
        y1: c_float,
        x2: c_float,
        y2: c_float,
        graph: GraphHandle,
        blend: bool,
    ) -> c_int {
        unsafe {
            (self.api.graph.draw_extend_graph_f)(x1, y1, x2, y2, graph.raw(), bool_to_flag(blend))
        }
    }

    /// Draws the `sw`×`sh` region at `sx`,`sy` of `graph`. `turn` defaults to `false`.
    pub fn draw_rect_graph(
        &self,
        dx: c_int,
        dy: c_int,
        sx: c_int,
        sy: c_int,
        sw: c_int,
        sh: c_int,
        graph: GraphHandle,
        blend: bool,
        turn: Option<bool>,
    ) -> c_int {
        unsafe {
            (self.api.graph.draw_rect_graph)(
                dx,
                dy,
                sx,
                sy,
                sw,
                sh,
                graph.raw(),
                bool_to_flag(blend),
                turn_flag(turn),
            )
        }
    }

    pub fn draw_rect_graph_f(
        &self,
        dx: c_float,
        dy: c_float,
        sx: c_int,
        sy: c_int,
        sw: c_int,
        sh: c_int,
        graph: GraphHandle,
        blend: bool,
        turn: Option<bool>,
    ) -> c_int {
        unsafe {
            (self.api.graph.draw_rect_graph_f)(
                dx,
                dy,
                sx,
                sy,
                sw,
                sh,
                graph.raw(),
                bool_to_flag(blend),
                turn_flag(turn),
            )
        }
    }

    pub fn draw_rect_extend_graph(
        &self,
        [dx1, dy1, dx2, dy2]: [c_int; 4],
        [sx, sy, sw, sh]: [c_int; 4],
        graph: GraphHandle,
        blend: bool,
        turn: Option<bool>,
    ) -> c_int {
        unsafe {
            (self.api.graph.draw_rect_extend_graph)(
                dx1,
                dy1,
                dx2,
                dy2,
                sx,
                sy,
                sw,
                sh,
                graph.raw(),
                bool_to_flag(blend),
                turn_flag(turn),
            )
        }
    }

    pub fn draw_rect_extend_graph_f(
        &self,
        [dx1, dy1, dx2, dy2]: [c_float; 4],
        [sx, sy, sw, sh]: [c_int; 4],
        graph: GraphHandle,
        blend: bool,
        turn: Option<bool>,
    ) -> c_int {
        unsafe {
            (self.api.graph.draw_rect_extend_graph_f)(
                dx1,
                dy1,
                dx2,
                dy2,
                sx,
                sy,
                sw,
                sh,
                graph.raw(),
                bool_to_flag(blend),
                turn_flag(turn),
            )
        }
    }

    /// Draws `graph` centered on `x`,`y`, scaled and rotated by `angle` radians.
    pub fn draw_rota_graph(
        &self,
        x: c_int,
        y: c_int,
        scale: c_double,
        angle: c_double,
        graph: GraphHandle,
        blend: bool,
        turn: Option<bool>,
    ) -> c_int {
        unsafe {
            (self.api.graph.draw_rota_graph)(
                x,
                y,
                scale,
                angle,
                graph.raw(),
                bool_to_flag(blend),
                turn_flag(turn),
            )
        }
    }

    pub fn draw_rota_graph_f(
        &self,
        x: c_float,
        y: c_float,
        scale: c_double,
        angle: c_double,
        graph: GraphHandle,
        blend: bool,
        turn: Option<bool>,
    ) -> c_int {
        unsafe {
            (self.api.graph.draw_rota_graph_f)(
                x,
                y,
                scale,
                angle,
                graph.raw(),
                bool_to_flag(blend),
                turn_flag(turn),
            )
        }
    }

    /// Like [`DxLib::draw_rota_graph`], rotating around `cx`,`cy` of the graph.
    pub fn draw_rota_graph2(
        &self,
        [x, y]: [c_int; 2],
        [cx, cy]: [c_int; 2],
        scale: c_double,
        angle: c_double,
        graph: GraphHandle,
        blend: bool,
        turn: Option<bool>,
    ) -> c_int {
        unsafe {
            (self.api.graph.draw_rota_graph2)(
                x,
                y,
                cx,
                cy,
                scale,
                angle,
                graph.raw(),
                bool_to_flag(blend),
                turn_flag(turn),
            )
        }
    }

    pub fn draw_rota_graph2_f(
        &self,
        [x, y]: [c_float; 2],
        [cx, cy]: [c_float; 2],
        scale: c_double,
        angle: c_double,
        graph: GraphHandle,
        blend: bool,
        turn: Option<bool>,
    ) -> c_int {
        unsafe {
            (self.api.graph.draw_rota_graph2_f)(
                x,
                y,
                cx,
                cy,
                scale,
                angle,
                graph.raw(),
                bool_to_flag(blend),
                turn_flag(turn),
            )
        }
    }

    /// Like [`DxLib::draw_rota_graph2`] with separate horizontal and vertical scales.
    pub fn draw_rota_graph3(
        &self,
        [x, y]: [c_int; 2],
        [cx, cy]: [c_int; 2],
        [x_scale, y_scale]: [c_double; 2],
        angle: c_double,
        graph: GraphHandle,
        blend: bool,
        turn: Option<bool>,
    ) -> c_int {
        unsafe {
            (self.api.graph.draw_rota_graph3)(
                x,
                y,
                cx,
                cy,
                x_scale,
                y_scale,
                angle,
                graph.raw(),
                bool_to_flag(blend),
                turn_flag(turn),
            )
        }
    }

    pub fn draw_rota_graph3_f(
        &self,
        [x, y]: [c_float; 2],
        [cx, cy]: [c_float; 2],
        [x_scale, y_scale]: [c_double; 2],
        angle: c_double,
        graph: GraphHandle,
        blend: bool,
        turn: Option<bool>,
    ) -> c_int {
        unsafe {
            (self.api.graph.draw_rota_graph3_f)(
                x,
                y,
                cx,
                cy,
                x_scale,
                y_scale,
                angle,
                graph.raw(),
                bool_to_flag(blend),
                turn_flag(turn),
            )
        }
    }

    pub fn draw_rect_rota_graph(
        &self,
        [x, y]: [c_int; 2],
        [sx, sy, sw, sh]: [c_int; 4],
        scale: c_double,
        angle: c_double,
        graph: GraphHandle,
        blend: bool,
        turn: Option<bool>,
    ) -> c_int {
        unsafe {
            (self.api.graph.draw_rect_rota_graph)(
                x,
                y,
                sx,
                sy,
                sw,
                sh,
                scale,
                angle,
                graph.raw(),
                bool_to_flag(blend),
                turn_flag(turn),
            )
        }
    }

    pub fn draw_rect_rota_graph_f(
        &self,
        [x, y]: [c_float; 2],
        [sx, sy, sw, sh]: [c_int; 4],
        scale: c_double,
        angle: c_double,
        graph: GraphHandle,
        blend: bool,
        turn: Option<bool>,
    ) -> c_int {
        unsafe {
            (self.api.graph.draw_rect_rota_graph_f)(
                x,
                y,
                sx,
                sy,
                sw,
                sh,
                scale,
                angle,
                graph.raw(),
                bool_to_flag(blend),
                turn_flag(turn),
            )
        }
    }

    pub fn draw_rect_rota_graph2(
        &self,
        [x, y]: [c_int; 2],
        [sx, sy, sw, sh]: [c_int; 4],
        [cx, cy]: [c_int; 2],
        scale: c_double,
        angle: c_double,
        graph: GraphHandle,
        blend: bool,
        turn: Option<bool>,
    ) -> c_int {
        unsafe {
            (self.api.graph.draw_rect_rota_graph2)(
                x,
                y,
                sx,
                sy,
                sw,
                sh,
                cx,
                cy,
                scale,
                angle,
                graph.raw(),
                bool_to_flag(blend),
                turn_flag(turn),
            )
        }
    }

    pub fn draw_rect_rota_graph2_f(
        &self,
        [x, y]: [c_float; 2],
        [sx, sy, sw, sh]: [c_int; 4],
        [cx, cy]: [c_float; 2],
        scale: c_double,
        angle: c_double,
        graph: GraphHandle,
        blend: bool,
        turn: Option<bool>,
    ) -> c_int {
        unsafe {
            (self.api.graph.draw_rect_rota_graph2_f)(
                x,
                y,
                sx,
                sy,
                sw,
                sh,
                cx,
                cy,
                scale,
                angle,
                graph.raw(),
                bool_to_flag(blend),
                turn_flag(turn),
            )
        }
    }

    pub fn draw_rect_rota_graph3(
        &self,
        [x, y]: [c_int; 2],
        [sx, sy, sw, sh]: [c_int; 4],
        [cx, cy]: [c_int; 2],
        [x_scale, y_scale]: [c_double; 2],
        angle: c_double,
        graph: GraphHandle,
        blend: bool,
        turn: Option<bool>,
    ) -> c_int {
        unsafe {
            (self.api.graph.draw_rect_rota_graph3)(
                x,
                y,
                sx,
                sy,
                sw,
                sh,
                cx,
                cy,
                x_scale,
                y_scale,
                angle,
                graph.raw(),
                bool_to_flag(blend),
                turn_flag(turn),
            )
        }
    }

    pub fn draw_rect_rota_graph3_f(
        &self,
        [x, y]: [c_float; 2],
        [sx, sy, sw, sh]: [c_int; 4],
        [cx, cy]: [c_float; 2],
        [x_scale, y_scale]: [c_double; 2],
        angle: c_double,
        graph: GraphHandle,
        blend: bool,
        turn: Option<bool>,
    ) -> c_int {
        unsafe {
            (self.api.graph.draw_rect_rota_graph3_f)(
                x,
                y,
                sx,
                sy,
                sw,
                sh,
                cx,
                cy,
                x_scale,
                y_scale,
                angle,
                graph.raw(),
                bool_to_flag(blend),
                turn_flag(turn),
            )
        }
    }

    /// Draws `graph` mirrored horizontally.
    pub fn draw_turn_graph(&self, x: c_int, y: c_int, graph: GraphHandle, blend: bool) -> c_int {
        unsafe { (self.api.graph.draw_turn_graph)(x, y, graph.raw(), bool_to_flag(blend)) }
    }

    pub fn draw_turn_graph_f(
        &self,
        x: c_float,
        y: c_float,
        graph: GraphHandle,
        blend: bool,
    ) -> c_int {
        unsafe { (self.api.graph.draw_turn_graph_f)(x, y, graph.raw(), bool_to_flag(blend)) }
    }

    /// Maps `graph` onto a quadrangle, corners clockwise from the top left.
    pub fn draw_modi_graph(
        &self,
        [[x1, y1], [x2, y2], [x3, y3], [x4, y4]]: [[c_int; 2]; 4],
        graph: GraphHandle,
        blend: bool,
    ) -> c_int {
        unsafe {
            (self.api.graph.draw_modi_graph)(
                x1,
                y1,
                x2,
                y2,
                x3,
                y3,
                x4,
                y4,
                graph.raw(),
                bool_to_flag(blend),
            )
        }
    }

    pub fn draw_modi_graph_f(
        &self,
        [[x1, y1], [x2, y2], [x3, y3], [x4, y4]]: [[c_float; 2]; 4],
        graph: GraphHandle,
        blend: bool,
    ) -> c_int {
        unsafe {
            (self.api.graph.draw_modi_graph_f)(
                x1,
                y1,
                x2,
                y2,
                x3,
                y3,
                x4,
                y4,
                graph.raw(),
                bool_to_flag(blend),
            )
        }
    }

    /// Clips drawing to the given rectangle.
    pub fn set_draw_area(&self, x1: c_int, y1: c_int, x2: c_int, y2: c_int) -> c_int {
        unsafe { (self.api.graph.set_draw_area)(x1, y1, x2, y2) }
    }

    /// `alpha` ranges over `0..=255`.
    pub fn set_draw_blend_mode(&self, mode: BlendMode, alpha: c_int) -> c_int {
        unsafe { (self.api.graph.set_draw_blend_mode)(mode.raw(), alpha) }
    }

    pub fn set_draw_bright(&self, red: c_int, green: c_int, blue: c_int) -> c_int {
        unsafe { (self.api.graph.set_draw_bright)(red, green, blue) }
    }

    pub fn set_basic_blend_flag(&self, blend: bool) -> c_int {
        unsafe { (self.api.graph.set_basic_blend_flag)(bool_to_flag(blend)) }
    }

    #[must_use]
    pub fn get_color(&self, red: c_int, green: c_int, blue: c_int) -> Color {
        Color::from_raw(unsafe { (self.api.graph.get_color)(red, green, blue) })
    }
}

#[cfg(test)]
mod tests {
    use cstr::cstr;
    use dxportlib_sys::{
        GraphFns,
        echo::{self, Value},
    };

    use super::*;
    use crate::{
        Screen,
        testing::{assert_family_covered, echo_dx, ints, single_call},
    };

    const WHITE: Color = Color::from_raw(0x00ff_ffff);

    #[test]
    fn line_thickness_default() {
        let dx = echo_dx();
        dx.draw_line(0, 0, 10, 20, WHITE, None);
        let implicit = single_call("DrawLine");
        dx.draw_line(0, 0, 10, 20, WHITE, Some(1));
        assert_eq!(single_call("DrawLine"), implicit);
        assert_eq!(implicit, ints(&[0, 0, 10, 20, 0x00ff_ffff, 1]));
    }

    #[test]
    fn float_variants_keep_widths() {
        let dx = echo_dx();
        dx.draw_line_f(0.5, 1.5, 2.5, 3.5, WHITE, Some(3));
        assert_eq!(
            single_call("DrawLineF"),
            [
                Value::Float(0.5),
                Value::Float(1.5),
                Value::Float(2.5),
                Value::Float(3.5),
                Value::Int(0x00ff_ffff),
                Value::Int(3),
            ]
        );

        let graph = GraphHandle::from_raw(5);
        dx.draw_rect_rota_graph2_f(
            [1.0, 2.0],
            [0, 0, 32, 32],
            [16.0, 16.0],
            2.0,
            0.25,
            graph,
            true,
            None,
        );
        assert_eq!(
            single_call("DrawRectRotaGraph2F"),
            [
                Value::Float(1.0),
                Value::Float(2.0),
                Value::Int(0),
                Value::Int(0),
                Value::Int(32),
                Value::Int(32),
                Value::Float(16.0),
                Value::Float(16.0),
                Value::Double(2.0),
                Value::Double(0.25),
                Value::Int(5),
                Value::Int(1),
                Value::Int(0),
            ]
        );
    }

    #[test]
    fn turn_defaults_to_false() {
        let dx = echo_dx();
        let graph = GraphHandle::from_raw(3);
        dx.draw_rota_graph(320, 240, 1.0, 0.0, graph, false, None);
        let implicit = single_call("DrawRotaGraph");
        dx.draw_rota_graph(320, 240, 1.0, 0.0, graph, false, Some(false));
        assert_eq!(single_call("DrawRotaGraph"), implicit);
        dx.draw_rota_graph(320, 240, 1.0, 0.0, graph, false, Some(true));
        assert_eq!(single_call("DrawRotaGraph").last(), Some(&Value::Int(1)));

        dx.draw_rect_graph(0, 0, 16, 16, 8, 8, graph, true, None);
        assert_eq!(
            single_call("DrawRectGraph"),
            ints(&[0, 0, 16, 16, 8, 8, 3, 1, 0])
        );
    }

    #[test]
    fn shape_order() {
        let dx = echo_dx();
        dx.draw_triangle([0, 0], [10, 0], [5, 8], WHITE, true);
        assert_eq!(
            single_call("DrawTriangle"),
            ints(&[0, 0, 10, 0, 5, 8, 0x00ff_ffff, 1])
        );
        dx.draw_modi_graph(
            [[0, 0], [4, 0], [4, 4], [0, 4]],
            GraphHandle::from_raw(9),
            false,
        );
        assert_eq!(
            single_call("DrawModiGraph"),
            ints(&[0, 0, 4, 0, 4, 4, 0, 4, 9, 0])
        );
    }

    #[test]
    fn load_returns_native_handle() {
        let dx = echo_dx();
        echo::push_return(-1);
        let graph = dx.load_graph(cstr!("missing.png"));
        assert!(graph.is_error());
        assert_eq!(
            single_call("LoadGraph"),
            [Value::Text(b"missing.png".to_vec())]
        );

        echo::push_return(12);
        assert_eq!(dx.load_graph(cstr!("ok.png")).raw(), 12);
    }

    #[test]
    fn size_slots_are_zeroed() {
        let dx = echo_dx();
        let (mut width, mut height) = (-3, -3);
        dx.get_graph_size(GraphHandle::from_raw(1234), &mut width, &mut height);
        assert_eq!((width, height), (0, 0));

        echo::push_slot_values([64, 48]);
        dx.get_graph_size(GraphHandle::from_raw(1), &mut width, &mut height);
        assert_eq!((width, height), (64, 48));

        let (mut r, mut g, mut b) = (1, 1, 1);
        echo::push_slot_values([255]);
        dx.get_trans_color(&mut r, &mut g, &mut b);
        assert_eq!((r, g, b), (255, 0, 0));
    }

    #[test]
    fn never_created_handle_is_forwarded() {
        let dx = echo_dx();
        assert_eq!(dx.delete_graph(GraphHandle::from_raw(0x7fff_0000)), 0);
        assert_eq!(single_call("DeleteGraph"), ints(&[0x7fff_0000]));
        dx.draw_graph(0, 0, GraphHandle::NONE, true);
        assert_eq!(single_call("DrawGraph"), ints(&[0, 0, -5, 1]));
    }

    #[test]
    fn blend_modes() {
        assert_eq!(BlendMode::Add.raw(), 2);
        assert_eq!(BlendMode::PmaAddX4.raw(), 22);
        assert_eq!(BlendMode::from_raw(6), Err(InvalidRawBlendMode(6)));
        assert_eq!(BlendMode::ALL.len(), 21);
        assert_eq!(GraphHandle::NONE.raw(), Screen::TempFront.raw());

        let dx = echo_dx();
        dx.set_draw_blend_mode(BlendMode::Alpha, 128);
        assert_eq!(single_call("SetDrawBlendMode"), ints(&[1, 128]));
    }

    #[test]
    fn rect_and_scale_order() {
        let dx = echo_dx();
        let graph = GraphHandle::from_raw(7);

        dx.draw_rota_graph3([10, 20], [3, 4], [1.5, 0.5], 0.75, graph, true, Some(true));
        assert_eq!(
            single_call("DrawRotaGraph3"),
            [
                Value::Int(10),
                Value::Int(20),
                Value::Int(3),
                Value::Int(4),
                Value::Double(1.5),
                Value::Double(0.5),
                Value::Double(0.75),
                Value::Int(7),
                Value::Int(1),
                Value::Int(1),
            ]
        );

        dx.draw_rect_rota_graph3_f(
            [1.5, 2.5],
            [8, 16, 32, 64],
            [4.0, 6.0],
            [2.0, 3.0],
            0.5,
            graph,
            false,
            None,
        );
        assert_eq!(
            single_call("DrawRectRotaGraph3F"),
            [
                Value::Float(1.5),
                Value::Float(2.5),
                Value::Int(8),
                Value::Int(16),
                Value::Int(32),
                Value::Int(64),
                Value::Float(4.0),
                Value::Float(6.0),
                Value::Double(2.0),
                Value::Double(3.0),
                Value::Double(0.5),
                Value::Int(7),
                Value::Int(0),
                Value::Int(0),
            ]
        );

        dx.draw_rect_extend_graph([0, 0, 64, 32], [16, 8, 32, 16], graph, true, None);
        assert_eq!(
            single_call("DrawRectExtendGraph"),
            ints(&[0, 0, 64, 32, 16, 8, 32, 16, 7, 1, 0])
        );

        dx.draw_rect_extend_graph_f(
            [0.5, 1.0, 64.5, 33.0],
            [1, 2, 3, 4],
            graph,
            false,
            Some(true),
        );
        assert_eq!(
            single_call("DrawRectExtendGraphF"),
            [
                Value::Float(0.5),
                Value::Float(1.0),
                Value::Float(64.5),
                Value::Float(33.0),
                Value::Int(1),
                Value::Int(2),
                Value::Int(3),
                Value::Int(4),
                Value::Int(7),
                Value::Int(0),
                Value::Int(1),
            ]
        );
    }

    #[test]
    fn corner_order() {
        let dx = echo_dx();
        dx.draw_quadrangle([[1, 2], [3, 4], [5, 6], [7, 8]], WHITE, false);
        assert_eq!(
            single_call("DrawQuadrangle"),
            ints(&[1, 2, 3, 4, 5, 6, 7, 8, 0x00ff_ffff, 0])
        );

        let corners = [[0.5, 1.5], [2.5, 3.5], [4.5, 5.5], [6.5, 7.5]];
        let floats: Vec<_> = corners.as_flattened().iter().copied().map(Value::Float).collect();

        dx.draw_quadrangle_f(corners, WHITE, true);
        let mut expected = floats.clone();
        expected.extend([Value::Int(0x00ff_ffff), Value::Int(1)]);
        assert_eq!(single_call("DrawQuadrangleF"), expected);

        dx.draw_modi_graph_f(corners, GraphHandle::from_raw(2), true);
        let mut expected = floats;
        expected.extend([Value::Int(2), Value::Int(1)]);
        assert_eq!(single_call("DrawModiGraphF"), expected);
    }

    #[test]
    fn derived_region_and_brightness() {
        let dx = echo_dx();
        echo::push_return(31);
        let derived = dx.derivation_graph(4, 8, 16, 32, GraphHandle::from_raw(30));
        assert_eq!(derived.raw(), 31);
        assert_eq!(single_call("DerivationGraph"), ints(&[4, 8, 16, 32, 30]));

        dx.set_draw_bright(255, 128, 0);
        assert_eq!(single_call("SetDrawBright"), ints(&[255, 128, 0]));
        dx.set_draw_area(1, 2, 639, 479);
        assert_eq!(single_call("SetDrawArea"), ints(&[1, 2, 639, 479]));
    }

    #[test]
    fn every_operation_reaches_the_table() {
        let dx = echo_dx();
        let graph = GraphHandle::from_raw(1);
        let (mut a, mut b, mut c) = (0, 0, 0);

        let _ = dx.load_graph(cstr!("a.png"));
        dx.delete_graph(graph);
        dx.init_graph();
        let _ = dx.derivation_graph(0, 0, 1, 1, graph);
        dx.get_graph_size(graph, &mut a, &mut b);
        dx.set_trans_color(1, 2, 3);
        dx.get_trans_color(&mut a, &mut b, &mut c);
        dx.set_use_trans_color(true);
        dx.draw_pixel(1, 1, WHITE);
        dx.draw_line(0, 0, 1, 1, WHITE, None);
        dx.draw_line_f(0., 0., 1., 1., WHITE, None);
        dx.draw_box(0, 0, 1, 1, WHITE, true);
        dx.draw_box_f(0., 0., 1., 1., WHITE, true);
        dx.draw_fill_box(0, 0, 1, 1, WHITE);
        dx.draw_fill_box_f(0., 0., 1., 1., WHITE);
        dx.draw_line_box(0, 0, 1, 1, WHITE);
        dx.draw_line_box_f(0., 0., 1., 1., WHITE);
        dx.draw_circle(5, 5, 2, WHITE, false);
        dx.draw_circle_f(5., 5., 2., WHITE, false);
        dx.draw_oval(5, 5, 2, 3, WHITE, false);
        dx.draw_oval_f(5., 5., 2., 3., WHITE, false);
        dx.draw_triangle([0, 0], [1, 0], [0, 1], WHITE, true);
        dx.draw_triangle_f([0., 0.], [1., 0.], [0., 1.], WHITE, true);
        dx.draw_quadrangle([[0, 0], [1, 0], [1, 1], [0, 1]], WHITE, true);
        dx.draw_quadrangle_f([[0., 0.], [1., 0.], [1., 1.], [0., 1.]], WHITE, true);
        dx.draw_graph(0, 0, graph, true);
        dx.draw_graph_f(0., 0., graph, true);
        dx.draw_extend_graph(0, 0, 2, 2, graph, true);
        dx.draw_extend_graph_f(0., 0., 2., 2., graph, true);
        dx.draw_rect_graph(0, 0, 0, 0, 1, 1, graph, true, None);
        dx.draw_rect_graph_f(0., 0., 0, 0, 1, 1, graph, true, None);
        dx.draw_rect_extend_graph([0, 0, 2, 2], [0, 0, 1, 1], graph, true, None);
        dx.draw_rect_extend_graph_f([0., 0., 2., 2.], [0, 0, 1, 1], graph, true, None);
        dx.draw_rota_graph(0, 0, 1., 0., graph, true, None);
        dx.draw_rota_graph_f(0., 0., 1., 0., graph, true, None);
        dx.draw_rota_graph2([0, 0], [1, 1], 1., 0., graph, true, None);
        dx.draw_rota_graph2_f([0., 0.], [1., 1.], 1., 0., graph, true, None);
        dx.draw_rota_graph3([0, 0], [1, 1], [1., 1.], 0., graph, true, None);
        dx.draw_rota_graph3_f([0., 0.], [1., 1.], [1., 1.], 0., graph, true, None);
        dx.draw_rect_rota_graph([0, 0], [0, 0, 1, 1], 1., 0., graph, true, None);
        dx.draw_rect_rota_graph_f([0., 0.], [0, 0, 1, 1], 1., 0., graph, true, None);
        dx.draw_rect_rota_graph2([0, 0], [0, 0, 1, 1], [1, 1], 1., 0., graph, true, None);
        dx.draw_rect_rota_graph2_f([0., 0.], [0, 0, 1, 1], [1., 1.], 1., 0., graph, true, None);
        dx.draw_rect_rota_graph3(
            [0, 0],
            [0, 0, 1, 1],
            [1, 1],
            [1., 1.],
            0.,
            graph,
            true,
            None,
        );
        dx.draw_rect_rota_graph3_f(
            [0., 0.],
            [0, 0, 1, 1],
            [1., 1.],
            [1., 1.],
            0.,
            graph,
            true,
            None,
        );
        dx.draw_turn_graph(0, 0, graph, true);
        dx.draw_turn_graph_f(0., 0., graph, true);
        dx.draw_modi_graph([[0, 0], [1, 0], [1, 1], [0, 1]], graph, true);
        dx.draw_modi_graph_f([[0., 0.], [1., 0.], [1., 1.], [0., 1.]], graph, true);
        dx.set_draw_area(0, 0, 1, 1);
        dx.set_draw_blend_mode(BlendMode::NoBlend, 255);
        dx.set_draw_bright(1, 1, 1);
        dx.set_basic_blend_flag(false);
        let _ = dx.get_color(1, 2, 3);

        assert_family_covered(GraphFns::OPERATIONS);
    }

    #[test]
    fn color_is_opaque() {
        let dx = echo_dx();
        echo::push_return(0x0012_3456);
        assert_eq!(dx.get_color(0x12, 0x34, 0x56), Color::from_raw(0x0012_3456));
        assert_eq!(single_call("GetColor"), ints(&[0x12, 0x34, 0x56]));
    }
}
