//! Wireframe meshes for the hero scene.
//!
//! Every shape is a list of vertices plus index pairs into it, drawn as line
//! segments. The rocket mirrors the studio's holographic look: wireframe
//! hull, glowing tip and rings, and a three-cone exhaust flame that the frame
//! loop scales for flicker.

use glam::Vec3;

pub struct LineMesh {
    pub verts: Vec<Vec3>,
    pub edges: Vec<(u16, u16)>,
    pub color: &'static str,
    pub alpha: f64,
}

impl LineMesh {
    fn new(color: &'static str, alpha: f64) -> Self {
        Self {
            verts: Vec::new(),
            edges: Vec::new(),
            color,
            alpha,
        }
    }

    fn push_vert(&mut self, v: Vec3) -> u16 {
        self.verts.push(v);
        (self.verts.len() - 1) as u16
    }

    fn push_edge(&mut self, a: u16, b: u16) {
        self.edges.push((a, b));
    }
}

/// Open-ended tube: top ring, bottom ring, connecting wall lines.
pub fn cylinder(
    top_radius: f32,
    bottom_radius: f32,
    height: f32,
    segments: u16,
    color: &'static str,
    alpha: f64,
) -> LineMesh {
    let mut mesh = LineMesh::new(color, alpha);
    let half = height / 2.0;
    for i in 0..segments {
        let angle = i as f32 * std::f32::consts::TAU / segments as f32;
        let (sin, cos) = angle.sin_cos();
        mesh.push_vert(Vec3::new(cos * top_radius, half, sin * top_radius));
        mesh.push_vert(Vec3::new(cos * bottom_radius, -half, sin * bottom_radius));
    }
    for i in 0..segments {
        let next = (i + 1) % segments;
        mesh.push_edge(i * 2, next * 2); // top ring
        mesh.push_edge(i * 2 + 1, next * 2 + 1); // bottom ring
        mesh.push_edge(i * 2, i * 2 + 1); // wall
    }
    mesh
}

/// Cone with its apex up: base ring plus spokes to the tip.
pub fn cone(radius: f32, height: f32, segments: u16, color: &'static str, alpha: f64) -> LineMesh {
    let mut mesh = LineMesh::new(color, alpha);
    let apex = mesh.push_vert(Vec3::new(0.0, height / 2.0, 0.0));
    for i in 0..segments {
        let angle = i as f32 * std::f32::consts::TAU / segments as f32;
        let (sin, cos) = angle.sin_cos();
        mesh.push_vert(Vec3::new(cos * radius, -height / 2.0, sin * radius));
    }
    for i in 0..segments {
        let base = 1 + i;
        let next = 1 + (i + 1) % segments;
        mesh.push_edge(base, next);
        mesh.push_edge(apex, base);
    }
    mesh
}

/// Flat circle in the XZ plane.
pub fn ring(radius: f32, segments: u16, color: &'static str, alpha: f64) -> LineMesh {
    let mut mesh = LineMesh::new(color, alpha);
    for i in 0..segments {
        let angle = i as f32 * std::f32::consts::TAU / segments as f32;
        let (sin, cos) = angle.sin_cos();
        mesh.push_vert(Vec3::new(cos * radius, 0.0, sin * radius));
    }
    for i in 0..segments {
        mesh.push_edge(i, (i + 1) % segments);
    }
    mesh
}

/// Axis-aligned box outline, 8 corners and 12 edges.
pub fn box_frame(width: f32, height: f32, depth: f32, color: &'static str, alpha: f64) -> LineMesh {
    let mut mesh = LineMesh::new(color, alpha);
    let (x, y, z) = (width / 2.0, height / 2.0, depth / 2.0);
    for &sy in &[-y, y] {
        for &sz in &[-z, z] {
            for &sx in &[-x, x] {
                mesh.push_vert(Vec3::new(sx, sy, sz));
            }
        }
    }
    const EDGES: [(u16, u16); 12] = [
        (0, 1), (1, 3), (3, 2), (2, 0), // bottom face
        (4, 5), (5, 7), (7, 6), (6, 4), // top face
        (0, 4), (1, 5), (2, 6), (3, 7), // verticals
    ];
    for e in EDGES {
        mesh.push_edge(e.0, e.1);
    }
    mesh
}

/// One positioned piece of the scene. `flame` parts get the per-frame flicker
/// scale applied around their own origin.
pub struct ScenePart {
    pub mesh: LineMesh,
    pub offset: Vec3,
    pub flame: bool,
}

/// The decorative rocket, part by part: hull, nose cone, four fins, engine,
/// three nested flame cones, detail rings and a porthole.
pub fn rocket_parts() -> Vec<ScenePart> {
    let mut parts = vec![
        ScenePart {
            mesh: cylinder(0.4, 0.5, 2.5, 16, "#3b82f6", 0.6),
            offset: Vec3::ZERO,
            flame: false,
        },
        ScenePart {
            mesh: cone(0.4, 1.0, 16, "#60a5fa", 0.7),
            offset: Vec3::new(0.0, 1.8, 0.0),
            flame: false,
        },
        // Nose tip glow, drawn as a tiny ring so it reads as a point of light.
        ScenePart {
            mesh: ring(0.08, 8, "#22d3ee", 1.0),
            offset: Vec3::new(0.0, 2.4, 0.0),
            flame: false,
        },
        ScenePart {
            mesh: cylinder(0.5, 0.4, 0.3, 16, "#3b82f6", 0.5),
            offset: Vec3::new(0.0, -1.4, 0.0),
            flame: false,
        },
        ScenePart {
            mesh: cone(0.4, 0.5, 16, "#60a5fa", 0.6),
            offset: Vec3::new(0.0, -1.7, 0.0),
            flame: false,
        },
    ];

    // Four fins, rotated around the hull.
    for i in 0..4 {
        let angle = i as f32 * std::f32::consts::TAU / 4.0;
        let (sin, cos) = angle.sin_cos();
        let mut fin = box_frame(0.5, 0.8, 0.05, "#60a5fa", 0.6);
        for v in &mut fin.verts {
            // Lean the fin outward, then swing it into place around the hull.
            let leaned = Vec3::new(
                v.x * 0.95 + v.y * 0.3,
                v.y * 0.95 - v.x * 0.3,
                v.z,
            );
            *v = Vec3::new(
                leaned.x * cos - leaned.z * sin,
                leaned.y,
                leaned.x * sin + leaned.z * cos,
            );
        }
        parts.push(ScenePart {
            mesh: fin,
            offset: Vec3::new(0.5 * cos, -1.0, 0.5 * sin),
            flame: false,
        });
    }

    // Exhaust flame, outer to core.
    parts.push(ScenePart {
        mesh: cone(0.35, 1.2, 12, "#22d3ee", 0.3),
        offset: Vec3::new(0.0, -2.2, 0.0),
        flame: true,
    });
    parts.push(ScenePart {
        mesh: cone(0.25, 0.9, 12, "#60a5fa", 0.4),
        offset: Vec3::new(0.0, -2.1, 0.0),
        flame: true,
    });
    parts.push(ScenePart {
        mesh: cone(0.15, 0.6, 12, "#ffffff", 0.6),
        offset: Vec3::new(0.0, -2.0, 0.0),
        flame: true,
    });

    // Detail rings along the hull.
    for (i, y) in [-0.5f32, 0.3, 1.0].into_iter().enumerate() {
        parts.push(ScenePart {
            mesh: ring(0.42 + i as f32 * 0.02, 32, "#22d3ee", 0.7),
            offset: Vec3::new(0.0, y, 0.0),
            flame: false,
        });
    }

    // Porthole on the front of the hull.
    let mut porthole = ring(0.15, 16, "#60a5fa", 0.8);
    for v in &mut porthole.verts {
        *v = Vec3::new(v.x, v.z, 0.0); // stand the ring upright, facing the camera
    }
    parts.push(ScenePart {
        mesh: porthole,
        offset: Vec3::new(0.0, 0.5, 0.42),
        flame: false,
    });

    parts
}

/// A pin tower: wireframe building body, a roof cap and an antenna line.
pub fn pin_tower(
    width: f32,
    height: f32,
    color: &'static str,
    alpha: f64,
) -> Vec<(LineMesh, Vec3)> {
    let mut pieces = vec![
        (box_frame(width, height, width, color, alpha), Vec3::new(0.0, height / 2.0, 0.0)),
        (
            box_frame(width * 0.6, height * 0.12, width * 0.6, color, alpha * 0.8),
            Vec3::new(0.0, height + height * 0.06, 0.0),
        ),
    ];
    let mut antenna = LineMesh::new("#22d3ee", alpha);
    let base = antenna.push_vert(Vec3::ZERO);
    let tip = antenna.push_vert(Vec3::new(0.0, height * 0.35, 0.0));
    antenna.push_edge(base, tip);
    pieces.push((antenna, Vec3::new(0.0, height * 1.12, 0.0)));
    pieces
}

/// Flat grid of lines on the ground plane, centered on the origin.
pub fn ground_grid(extent: f32, step: f32, color: &'static str, alpha: f64) -> LineMesh {
    let mut mesh = LineMesh::new(color, alpha);
    let mut coord = -extent;
    while coord <= extent + f32::EPSILON {
        let a = mesh.push_vert(Vec3::new(coord, 0.0, -extent));
        let b = mesh.push_vert(Vec3::new(coord, 0.0, extent));
        mesh.push_edge(a, b);
        let c = mesh.push_vert(Vec3::new(-extent, 0.0, coord));
        let d = mesh.push_vert(Vec3::new(extent, 0.0, coord));
        mesh.push_edge(c, d);
        coord += step;
    }
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cylinder_edge_indices_in_bounds() {
        let mesh = cylinder(0.4, 0.5, 2.5, 16, "#3b82f6", 0.6);
        assert_eq!(mesh.verts.len(), 32);
        for (a, b) in &mesh.edges {
            assert!((*a as usize) < mesh.verts.len());
            assert!((*b as usize) < mesh.verts.len());
        }
    }

    #[test]
    fn test_box_frame_has_twelve_edges() {
        let mesh = box_frame(1.0, 2.0, 3.0, "#fff", 1.0);
        assert_eq!(mesh.verts.len(), 8);
        assert_eq!(mesh.edges.len(), 12);
    }

    #[test]
    fn test_ring_closes_on_itself() {
        let mesh = ring(1.0, 24, "#fff", 1.0);
        assert_eq!(mesh.verts.len(), 24);
        assert_eq!(mesh.edges.len(), 24);
        assert_eq!(mesh.edges.last().copied(), Some((23, 0)));
    }

    #[test]
    fn test_rocket_has_flame_and_hull_parts() {
        let parts = rocket_parts();
        let flames = parts.iter().filter(|p| p.flame).count();
        assert_eq!(flames, 3, "three nested flame cones");
        assert!(parts.len() > 10, "rocket should be a multi-part assembly");
        for part in &parts {
            assert!(!part.mesh.edges.is_empty());
        }
    }

    #[test]
    fn test_pin_tower_sits_on_the_ground() {
        for (mesh, offset) in pin_tower(1.0, 4.0, "#3b82f6", 0.5) {
            for v in &mesh.verts {
                assert!(
                    v.y + offset.y >= -f32::EPSILON,
                    "tower geometry must not dip below the ground plane"
                );
            }
        }
    }
}
