//! Graph handles and primitive drawing.
//!
//! `...F` variants take `c_float` for destination coordinates. Source rectangles stay `c_int`;
//! scales and angles are always `c_double`.

use std::os::raw::{c_char, c_double, c_float, c_int};

use crate::consts::FALSE;

binding_table! {
    pub struct GraphFns {
        fn load_graph as "LoadGraph" = "DxLib_LoadGraph"(name: *const c_char) -> c_int;
        fn delete_graph as "DeleteGraph" = "DxLib_DeleteGraph"(graph_id: c_int) -> c_int;
        /// Deletes every graph handle.
        fn init_graph as "InitGraph" = "DxLib_InitGraph"() -> c_int;
        fn derivation_graph as "DerivationGraph" = "DxLib_DerivationGraph"(
            x: c_int,
            y: c_int,
            w: c_int,
            h: c_int,
            graph_id: c_int,
        ) -> c_int;
        fn get_graph_size as "GetGraphSize" = "DxLib_GetGraphSize"(
            graph_id: c_int,
            width: *mut c_int,
            height: *mut c_int,
        ) -> c_int;
        fn set_trans_color as "SetTransColor" = "DxLib_SetTransColor"(r: c_int, g: c_int, b: c_int) -> c_int;
        fn get_trans_color as "GetTransColor" =
            "DxLib_GetTransColor"(r: *mut c_int, g: *mut c_int, b: *mut c_int) -> c_int;
        fn set_use_trans_color as "SetUseTransColor" = "DxLib_SetUseTransColor"(flag: c_int) -> c_int;

        fn draw_pixel as "DrawPixel" = "DxLib_DrawPixel"(x: c_int, y: c_int, color: c_int) -> c_int;
        fn draw_line as "DrawLine" = "DxLib_DrawLine"(
            x1: c_int,
            y1: c_int,
            x2: c_int,
            y2: c_int,
            color: c_int,
            thickness: c_int = 1,
        ) -> c_int;
        fn draw_line_f as "DrawLineF" = "DxLib_DrawLineF"(
            x1: c_float,
            y1: c_float,
            x2: c_float,
            y2: c_float,
            color: c_int,
            thickness: c_int = 1,
        ) -> c_int;
        fn draw_box as "DrawBox" = "DxLib_DrawBox"(
            x1: c_int,
            y1: c_int,
            x2: c_int,
            y2: c_int,
            color: c_int,
            fill_flag: c_int,
        ) -> c_int;
        fn draw_box_f as "DrawBoxF" = "DxLib_DrawBoxF"(
            x1: c_float,
            y1: c_float,
            x2: c_float,
            y2: c_float,
            color: c_int,
            fill_flag: c_int,
        ) -> c_int;
        fn draw_fill_box as "DrawFillBox" = "DxLib_DrawFillBox"(
            x1: c_int,
            y1: c_int,
            x2: c_int,
            y2: c_int,
            color: c_int,
        ) -> c_int;
        fn draw_fill_box_f as "DrawFillBoxF" = "DxLib_DrawFillBoxF"(
            x1: c_float,
            y1: c_float,
            x2: c_float,
            y2: c_float,
            color: c_int,
        ) -> c_int;
        fn draw_line_box as "DrawLineBox" = "DxLib_DrawLineBox"(
            x1: c_int,
            y1: c_int,
            x2: c_int,
            y2: c_int,
            color: c_int,
        ) -> c_int;
        fn draw_line_box_f as "DrawLineBoxF" = "DxLib_DrawLineBoxF"(
            x1: c_float,
            y1: c_float,
            x2: c_float,
            y2: c_float,
            color: c_int,
        ) -> c_int;
        fn draw_circle as "DrawCircle" = "DxLib_DrawCircle"(
            x: c_int,
            y: c_int,
            r: c_int,
            color: c_int,
            fill_flag: c_int,
        ) -> c_int;
        fn draw_circle_f as "DrawCircleF" = "DxLib_DrawCircleF"(
            x: c_float,
            y: c_float,
            r: c_float,
            color: c_int,
            fill_flag: c_int,
        ) -> c_int;
        fn draw_oval as "DrawOval" = "DxLib_DrawOval"(
            x: c_int,
            y: c_int,
            rx: c_int,
            ry: c_int,
            color: c_int,
            fill_flag: c_int,
        ) -> c_int;
        fn draw_oval_f as "DrawOvalF" = "DxLib_DrawOvalF"(
            x: c_float,
            y: c_float,
            rx: c_float,
            ry: c_float,
            color: c_int,
            fill_flag: c_int,
        ) -> c_int;
        fn draw_triangle as "DrawTriangle" = "DxLib_DrawTriangle"(
            x1: c_int,
            y1: c_int,
            x2: c_int,
            y2: c_int,
            x3: c_int,
            y3: c_int,
            color: c_int,
            fill_flag: c_int,
        ) -> c_int;
        fn draw_triangle_f as "DrawTriangleF" = "DxLib_DrawTriangleF"(
            x1: c_float,
            y1: c_float,
            x2: c_float,
            y2: c_float,
            x3: c_float,
            y3: c_float,
            color: c_int,
            fill_flag: c_int,
        ) -> c_int;
        fn draw_quadrangle as "DrawQuadrangle" = "DxLib_DrawQuadrangle"(
            x1: c_int,
            y1: c_int,
            x2: c_int,
            y2: c_int,
            x3: c_int,
            y3: c_int,
            x4: c_int,
            y4: c_int,
            color: c_int,
            fill_flag: c_int,
        ) -> c_int;
        fn draw_quadrangle_f as "DrawQuadrangleF" = "DxLib_DrawQuadrangleF"(
            x1: c_float,
            y1: c_float,
            x2: c_float,
            y2: c_float,
            x3: c_float,
            y3: c_float,
            x4: c_float,
            y4: c_float,
            color: c_int,
            fill_flag: c_int,
        ) -> c_int;

        fn draw_graph as "DrawGraph" = "DxLib_DrawGraph"(
            x: c_int,
            y: c_int,
            graph_id: c_int,
            blend_flag: c_int,
        ) -> c_int;
        fn draw_graph_f as "DrawGraphF" = "DxLib_DrawGraphF"(
            x: c_float,
            y: c_float,
            graph_id: c_int,
            blend_flag: c_int,
        ) -> c_int;
        fn draw_extend_graph as "DrawExtendGraph" = "DxLib_DrawExtendGraph"(
            x1: c_int,
            y1: c_int,
            x2: c_int,
            y2: c_int,
            graph_id: c_int,
            blend_flag: c_int,
        ) -> c_int;
        fn draw_extend_graph_f as "DrawExtendGraphF" = "DxLib_DrawExtendGraphF"(
            x1: c_float,
            y1: c_float,
            x2: c_float,
            y2: c_float,
            graph_id: c_int,
            blend_flag: c_int,
        ) -> c_int;
        fn draw_rect_graph as "DrawRectGraph" = "DxLib_DrawRectGraph"(
            dx: c_int,
            dy: c_int,
            sx: c_int,
            sy: c_int,
            sw: c_int,
            sh: c_int,
            graph_id: c_int,
            blend_flag: c_int,
            turn_flag: c_int = FALSE,
        ) -> c_int;
        fn draw_rect_graph_f as "DrawRectGraphF" = "DxLib_DrawRectGraphF"(
            dx: c_float,
            dy: c_float,
            sx: c_int,
            sy: c_int,
            sw: c_int,
            sh: c_int,
            graph_id: c_int,
            blend_flag: c_int,
            turn_flag: c_int = FALSE,
        ) -> c_int;
        fn draw_rect_extend_graph as "DrawRectExtendGraph" = "DxLib_DrawRectExtendGraph"(
            dx1: c_int,
            dy1: c_int,
            dx2: c_int,
            dy2: c_int,
            sx: c_int,
            sy: c_int,
            sw: c_int,
            sh: c_int,
            graph_id: c_int,
            blend_flag: c_int,
            turn_flag: c_int = FALSE,
        ) -> c_int;
        fn draw_rect_extend_graph_f as "DrawRectExtendGraphF" = "DxLib_DrawRectExtendGraphF"(
            dx1: c_float,
            dy1: c_float,
            dx2: c_float,
            dy2: c_float,
            sx: c_int,
            sy: c_int,
            sw: c_int,
            sh: c_int,
            graph_id: c_int,
            blend_flag: c_int,
            turn_flag: c_int = FALSE,
        ) -> c_int;
        fn draw_rota_graph as "DrawRotaGraph" = "DxLib_DrawRotaGraph"(
            x: c_int,
            y: c_int,
            scale_factor: c_double,
            angle: c_double,
            graph_id: c_int,
            blend_flag: c_int,
            turn: c_int = FALSE,
        ) -> c_int;
        fn draw_rota_graph_f as "DrawRotaGraphF" = "DxLib_DrawRotaGraphF"(
            x: c_float,
            y: c_float,
            scale_factor: c_double,
            angle: c_double,
            graph_id: c_int,
            blend_flag: c_int,
            turn: c_int = FALSE,
        ) -> c_int;
        fn draw_rota_graph2 as "DrawRotaGraph2" = "DxLib_DrawRotaGraph2"(
            x: c_int,
            y: c_int,
            cx: c_int,
            cy: c_int,
            scale_factor: c_double,
            angle: c_double,
            graph_id: c_int,
            blend_flag: c_int,
            turn: c_int = FALSE,
        ) -> c_int;
        fn draw_rota_graph2_f as "DrawRotaGraph2F" = "DxLib_DrawRotaGraph2F"(
            x: c_float,
            y: c_float,
            cx: c_float,
            cy: c_float,
            scale_factor: c_double,
            angle: c_double,
            graph_id: c_int,
            blend_flag: c_int,
            turn: c_int = FALSE,
        ) -> c_int;
        fn draw_rota_graph3 as "DrawRotaGraph3" = "DxLib_DrawRotaGraph3"(
            x: c_int,
            y: c_int,
            cx: c_int,
            cy: c_int,
            x_scale_factor: c_double,
            y_scale_factor: c_double,
            angle: c_double,
            graph_id: c_int,
            blend_flag: c_int,
            turn: c_int = FALSE,
        ) -> c_int;
        fn draw_rota_graph3_f as "DrawRotaGraph3F" = "DxLib_DrawRotaGraph3F"(
            x: c_float,
            y: c_float,
            cx: c_float,
            cy: c_float,
            x_scale_factor: c_double,
            y_scale_factor: c_double,
            angle: c_double,
            graph_id: c_int,
            blend_flag: c_int,
            turn: c_int = FALSE,
        ) -> c_int;
        fn draw_rect_rota_graph as "DrawRectRotaGraph" = "DxLib_DrawRectRotaGraph"(
            x: c_int,
            y: c_int,
            sx: c_int,
            sy: c_int,
            sw: c_int,
            sh: c_int,
            scale_factor: c_double,
            angle: c_double,
            graph_id: c_int,
            blend_flag: c_int,
            turn: c_int = FALSE,
        ) -> c_int;
        fn draw_rect_rota_graph_f as "DrawRectRotaGraphF" = "DxLib_DrawRectRotaGraphF"(
            x: c_float,
            y: c_float,
            sx: c_int,
            sy: c_int,
            sw: c_int,
            sh: c_int,
            scale_factor: c_double,
            angle: c_double,
            graph_id: c_int,
            blend_flag: c_int,
            turn: c_int = FALSE,
        ) -> c_int;
        fn draw_rect_rota_graph2 as "DrawRectRotaGraph2" = "DxLib_DrawRectRotaGraph2"(
            x: c_int,
            y: c_int,
            sx: c_int,
            sy: c_int,
            sw: c_int,
            sh: c_int,
            cx: c_int,
            cy: c_int,
            scale_factor: c_double,
            angle: c_double,
            graph_id: c_int,
            blend_flag: c_int,
            turn: c_int = FALSE,
        ) -> c_int;
        fn draw_rect_rota_graph2_f as "DrawRectRotaGraph2F" = "DxLib_DrawRectRotaGraph2F"(
            x: c_float,
            y: c_float,
            sx: c_int,
            sy: c_int,
            sw: c_int,
            sh: c_int,
            cx: c_float,
            cy: c_float,
            scale_factor: c_double,
            angle: c_double,
            graph_id: c_int,
            blend_flag: c_int,
            turn: c_int = FALSE,
        ) -> c_int;
        fn draw_rect_rota_graph3 as "DrawRectRotaGraph3" = "DxLib_DrawRectRotaGraph3"(
            x: c_int,
            y: c_int,
            sx: c_int,
            sy: c_int,
            sw: c_int,
            sh: c_int,
            cx: c_int,
            cy: c_int,
            x_scale_factor: c_double,
            y_scale_factor: c_double,
            angle: c_double,
            graph_id: c_int,
            blend_flag: c_int,
            turn: c_int = FALSE,
        ) -> c_int;
        fn draw_rect_rota_graph3_f as "DrawRectRotaGraph3F" = "DxLib_DrawRectRotaGraph3F"(
            x: c_float,
            y: c_float,
            sx: c_int,
            sy: c_int,
            sw: c_int,
            sh: c_int,
            cx: c_float,
            cy: c_float,
            x_scale_factor: c_double,
            y_scale_factor: c_double,
            angle: c_double,
            graph_id: c_int,
            blend_flag: c_int,
            turn: c_int = FALSE,
        ) -> c_int;
        fn draw_turn_graph as "DrawTurnGraph" = "DxLib_DrawTurnGraph"(
            x: c_int,
            y: c_int,
            graph_id: c_int,
            blend_flag: c_int,
        ) -> c_int;
        fn draw_turn_graph_f as "DrawTurnGraphF" = "DxLib_DrawTurnGraphF"(
            x: c_float,
            y: c_float,
            graph_id: c_int,
            blend_flag: c_int,
        ) -> c_int;
        /// Maps the graph onto an arbitrary quadrangle, corners clockwise from the top left.
        fn draw_modi_graph as "DrawModiGraph" = "DxLib_DrawModiGraph"(
            x1: c_int,
            y1: c_int,
            x2: c_int,
            y2: c_int,
            x3: c_int,
            y3: c_int,
            x4: c_int,
            y4: c_int,
            graph_id: c_int,
            blend_flag: c_int,
        ) -> c_int;
        fn draw_modi_graph_f as "DrawModiGraphF" = "DxLib_DrawModiGraphF"(
            x1: c_float,
            y1: c_float,
            x2: c_float,
            y2: c_float,
            x3: c_float,
            y3: c_float,
            x4: c_float,
            y4: c_float,
            graph_id: c_int,
            blend_flag: c_int,
        ) -> c_int;

        fn set_draw_area as "SetDrawArea" = "DxLib_SetDrawArea"(
            x1: c_int,
            y1: c_int,
            x2: c_int,
            y2: c_int,
        ) -> c_int;
        fn set_draw_blend_mode as "SetDrawBlendMode" =
            "DxLib_SetDrawBlendMode"(blend_mode: c_int, alpha: c_int) -> c_int;
        fn set_draw_bright as "SetDrawBright" = "DxLib_SetDrawBright"(
            red_bright: c_int,
            green_bright: c_int,
            blue_bright: c_int,
        ) -> c_int;
        fn set_basic_blend_flag as "SetBasicBlendFlag" = "DxLib_SetBasicBlendFlag"(blend_flag: c_int) -> c_int;
        /// Packs a color in the native pixel format.
        fn get_color as "GetColor" = "DxLib_GetColor"(red: c_int, green: c_int, blue: c_int) -> c_int;
    }
}
