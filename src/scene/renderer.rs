use std::cell::RefCell;
use std::rc::Rc;

use glam::{EulerRot, Mat4, Vec3};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use crate::catalog;
use crate::scene::geometry::{self, LineMesh, ScenePart};
use crate::scene::motion;
use crate::scroll;

#[derive(Properties, PartialEq)]
pub struct PinSceneProps {
    /// Raw page scroll progress in [0, 1].
    pub progress: f64,
}

struct Pin {
    pieces: Vec<(LineMesh, Vec3)>,
    base: Vec3,
}

fn build_pins() -> Vec<Pin> {
    // One tower per catalog entry, in its project color, plus a few unlit
    // filler towers so the skyline doesn't look staged.
    let slots: [(f32, f32, f32, f32); 3] = [
        (-6.0, -2.0, 7.0, 1.8),
        (0.5, -4.5, 8.5, 2.0),
        (6.5, -1.0, 6.0, 1.6),
    ];
    let mut pins: Vec<Pin> = catalog::projects()
        .iter()
        .zip(slots)
        .map(|(project, (x, z, height, width))| Pin {
            pieces: geometry::pin_tower(width, height, project.color, 0.55),
            base: Vec3::new(x, 0.0, z),
        })
        .collect();

    for (x, z, height, width) in [
        (-11.5f32, -8.0f32, 4.0f32, 1.2f32),
        (3.5, -9.5, 5.0, 1.4),
        (10.5, -6.0, 4.5, 1.3),
        (-3.0, -11.0, 5.5, 1.5),
    ] {
        pins.push(Pin {
            pieces: geometry::pin_tower(width, height, "#334155", 0.4),
            base: Vec3::new(x, 0.0, z),
        });
    }
    pins
}

fn view_projection(width: f64, height: f64, hero: f64) -> Mat4 {
    // The camera drifts upward as the hero scrolls away, which reads as the
    // city sinking below the fold.
    let eye = Vec3::new(0.0, 5.0 + hero as f32 * 3.0, 22.0);
    let target = Vec3::new(0.0, 3.0 - hero as f32 * 1.5, 0.0);
    let aspect = if height > 0.0 { (width / height) as f32 } else { 1.0 };
    Mat4::perspective_rh_gl(50f32.to_radians(), aspect, 0.1, 200.0)
        * Mat4::look_at_rh(eye, target, Vec3::Y)
}

fn project(mvp: Mat4, point: Vec3, width: f64, height: f64) -> Option<(f64, f64)> {
    let clip = mvp * point.extend(1.0);
    if clip.w <= 0.1 {
        return None;
    }
    let ndc_x = (clip.x / clip.w) as f64;
    let ndc_y = (clip.y / clip.w) as f64;
    Some((
        (ndc_x * 0.5 + 0.5) * width,
        (1.0 - (ndc_y * 0.5 + 0.5)) * height,
    ))
}

fn draw_mesh(
    ctx: &CanvasRenderingContext2d,
    mesh: &LineMesh,
    model: Mat4,
    vp: Mat4,
    width: f64,
    height: f64,
) {
    let mvp = vp * model;
    ctx.set_stroke_style_str(mesh.color);
    ctx.set_global_alpha(mesh.alpha);
    ctx.begin_path();
    for &(a, b) in &mesh.edges {
        let pa = project(mvp, mesh.verts[a as usize], width, height);
        let pb = project(mvp, mesh.verts[b as usize], width, height);
        if let (Some((ax, ay)), Some((bx, by))) = (pa, pb) {
            ctx.move_to(ax, ay);
            ctx.line_to(bx, by);
        }
    }
    ctx.stroke();
}

fn draw_frame(
    canvas: &HtmlCanvasElement,
    rocket: &[ScenePart],
    pins: &[Pin],
    grid: &LineMesh,
    time: f64,
    progress: f64,
) {
    if !canvas.is_connected() {
        return;
    }
    let ctx = match canvas.get_context("2d").ok().flatten() {
        Some(c) => match c.dyn_into::<CanvasRenderingContext2d>() {
            Ok(c) => c,
            Err(_) => return,
        },
        // No 2d context: skip drawing, the hero copy is plain DOM either way.
        None => return,
    };
    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    ctx.set_global_alpha(1.0);
    ctx.clear_rect(0.0, 0.0, width, height);
    ctx.set_line_width(1.5);

    let hero = scroll::hero_progress(progress);
    let vp = view_projection(width, height, hero);

    draw_mesh(&ctx, grid, Mat4::IDENTITY, vp, width, height);

    for pin in pins {
        let base = Mat4::from_translation(pin.base);
        for (mesh, offset) in &pin.pieces {
            draw_mesh(&ctx, mesh, base * Mat4::from_translation(*offset), vp, width, height);
        }
    }

    let rocket_model = Mat4::from_translation(Vec3::new(
        -10.0,
        3.5 + motion::bob_offset(time) as f32,
        -6.0,
    )) * Mat4::from_euler(
        EulerRot::XYZ,
        0.1,
        0.3,
        0.15 + motion::sway_angle(time) as f32,
    ) * Mat4::from_scale(Vec3::splat(1.8));

    let flicker = motion::flame_scale(time) as f32;
    for part in rocket {
        let mut model = rocket_model * Mat4::from_translation(part.offset);
        if part.flame {
            model *= Mat4::from_scale(Vec3::new(1.0, flicker, 1.0));
        }
        draw_mesh(&ctx, &part.mesh, model, vp, width, height);
    }
}

#[function_component(PinScene)]
pub fn pin_scene(props: &PinSceneProps) -> Html {
    let canvas_ref = use_node_ref();
    let progress_ref = use_mut_ref(|| 0.0f64);

    // Keep the latest scroll progress visible to the frame loop without
    // re-registering the loop on every render.
    {
        let progress_ref = progress_ref.clone();
        use_effect_with_deps(
            move |progress: &f64| {
                *progress_ref.borrow_mut() = *progress;
                || ()
            },
            props.progress,
        );
    }

    {
        let canvas_ref = canvas_ref.clone();
        let progress_ref = progress_ref.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().expect("window");
                let canvas: HtmlCanvasElement = canvas_ref.cast().expect("canvas");

                let apply_canvas_size = {
                    let canvas = canvas.clone();
                    let window = window.clone();
                    move || {
                        let width = window
                            .inner_width()
                            .ok()
                            .and_then(|v| v.as_f64())
                            .unwrap_or(1280.0);
                        let height = window
                            .inner_height()
                            .ok()
                            .and_then(|v| v.as_f64())
                            .unwrap_or(720.0);
                        canvas.set_width(width.max(1.0) as u32);
                        canvas.set_height(height.max(1.0) as u32);
                    }
                };
                apply_canvas_size();

                let resize_cb = Closure::wrap(Box::new(apply_canvas_size) as Box<dyn FnMut()>);
                window
                    .add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref())
                    .expect("resize listener");

                // Scene data is built once; every frame only recomputes
                // transforms from the current clock and scroll position.
                let rocket = Rc::new(geometry::rocket_parts());
                let pins = Rc::new(build_pins());
                let grid = Rc::new(geometry::ground_grid(24.0, 2.0, "#1e293b", 0.5));

                let raf_id = Rc::new(RefCell::new(None::<i32>));
                {
                    let raf_id_loop = raf_id.clone();
                    let window_loop = window.clone();
                    let canvas = canvas.clone();
                    let closure_cell: Rc<RefCell<Option<Closure<dyn FnMut()>>>> =
                        Rc::new(RefCell::new(None));
                    let closure_cell_clone = closure_cell.clone();
                    *closure_cell.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                        let time = window_loop
                            .performance()
                            .map(|p| p.now() / 1000.0)
                            .unwrap_or(0.0);
                        draw_frame(
                            &canvas,
                            &rocket,
                            &pins,
                            &grid,
                            time,
                            *progress_ref.borrow(),
                        );
                        if let Ok(id) = window_loop.request_animation_frame(
                            closure_cell_clone
                                .borrow()
                                .as_ref()
                                .unwrap()
                                .as_ref()
                                .unchecked_ref(),
                        ) {
                            *raf_id_loop.borrow_mut() = Some(id);
                        }
                    })
                        as Box<dyn FnMut()>));
                    {
                        let closure_cell_ref = closure_cell.borrow();
                        if let Ok(id) = window.request_animation_frame(
                            closure_cell_ref
                                .as_ref()
                                .unwrap()
                                .as_ref()
                                .unchecked_ref(),
                        ) {
                            *raf_id.borrow_mut() = Some(id);
                        }
                    }
                    // The closure cell keeps itself alive through the loop;
                    // cancelling the pending frame is what stops it.
                }

                let window_cleanup = window.clone();
                move || {
                    if let Some(id) = raf_id.borrow_mut().take() {
                        let _ = window_cleanup.cancel_animation_frame(id);
                    }
                    let _ = window_cleanup.remove_event_listener_with_callback(
                        "resize",
                        resize_cb.as_ref().unchecked_ref(),
                    );
                }
            },
            (),
        );
    }

    let opacity = motion::scene_opacity(props.progress);
    let pointer_events = if opacity <= f64::EPSILON { "none" } else { "auto" };

    html! {
        <div
            class="pin-scene"
            style={format!(
                "position: absolute; inset: 0; z-index: 0; opacity: {:.3}; pointer-events: {};",
                opacity, pointer_events
            )}
        >
            <canvas ref={canvas_ref} style="display: block; width: 100%; height: 100%;" />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_of_scene_projects_near_screen_center() {
        let vp = Mat4::perspective_rh_gl(50f32.to_radians(), 1.0, 0.1, 200.0)
            * Mat4::look_at_rh(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO, Vec3::Y);
        let (x, y) = project(vp, Vec3::ZERO, 800.0, 800.0).expect("in front of camera");
        assert!((x - 400.0).abs() < 1e-3, "x was {}", x);
        assert!((y - 400.0).abs() < 1e-3, "y was {}", y);
    }

    #[test]
    fn test_points_behind_camera_are_rejected() {
        let vp = Mat4::perspective_rh_gl(50f32.to_radians(), 1.0, 0.1, 200.0)
            * Mat4::look_at_rh(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO, Vec3::Y);
        assert!(project(vp, Vec3::new(0.0, 0.0, 50.0), 800.0, 800.0).is_none());
    }

    #[test]
    fn test_pin_field_covers_every_project() {
        let pins = build_pins();
        assert!(pins.len() >= catalog::projects().len());
    }
}
