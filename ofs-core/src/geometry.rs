//! Vertex layouts and the hand-written meshes the demos upload.
//!
//! All vertex structs are `#[repr(C)]` and made only of `f32`s so they can be handed to the GPU
//! as raw bytes.

/// Position only.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PositionVertex {
    pub position: [f32; 3],
}

/// Position and per-vertex colour.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

/// Position and texture coordinates.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TexturedVertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

/// Position, surface normal and texture coordinates.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LitVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

const fn lit(position: [f32; 3], normal: [f32; 3], uv: [f32; 2]) -> LitVertex {
    LitVertex {
        position,
        normal,
        uv,
    }
}

pub const TRIANGLE: [PositionVertex; 3] = [
    PositionVertex {
        position: [-0.5, -0.5, 0.0],
    },
    PositionVertex {
        position: [0.5, -0.5, 0.0],
    },
    PositionVertex {
        position: [0.0, 0.5, 0.0],
    },
];

/// Corners of a quad, counter-clockwise from the top right. Drawn with [`QUAD_INDICES`].
pub const QUAD: [PositionVertex; 4] = [
    PositionVertex {
        position: [0.5, 0.5, 0.0],
    },
    PositionVertex {
        position: [0.5, -0.5, 0.0],
    },
    PositionVertex {
        position: [-0.5, -0.5, 0.0],
    },
    PositionVertex {
        position: [-0.5, 0.5, 0.0],
    },
];

/// The quad from [`QUAD`] with red, green, blue and white corners.
pub const COLORED_QUAD: [ColorVertex; 4] = [
    ColorVertex {
        position: [0.5, 0.5, 0.0],
        color: [1.0, 0.0, 0.0],
    },
    ColorVertex {
        position: [0.5, -0.5, 0.0],
        color: [0.0, 1.0, 0.0],
    },
    ColorVertex {
        position: [-0.5, -0.5, 0.0],
        color: [0.0, 0.0, 1.0],
    },
    ColorVertex {
        position: [-0.5, 0.5, 0.0],
        color: [1.0, 1.0, 1.0],
    },
];

pub const QUAD_INDICES: [u32; 6] = [0, 1, 3, 1, 2, 3];

/// Unit cube centred on the origin, six faces of two triangles each, drawn without indices.
///
/// Faces are ordered back, front, left, right, bottom, top.
#[rustfmt::skip]
pub const CUBE: [LitVertex; 36] = [
    lit([-0.5, -0.5, -0.5], [ 0.0,  0.0, -1.0], [0.0, 0.0]),
    lit([ 0.5, -0.5, -0.5], [ 0.0,  0.0, -1.0], [1.0, 0.0]),
    lit([ 0.5,  0.5, -0.5], [ 0.0,  0.0, -1.0], [1.0, 1.0]),
    lit([ 0.5,  0.5, -0.5], [ 0.0,  0.0, -1.0], [1.0, 1.0]),
    lit([-0.5,  0.5, -0.5], [ 0.0,  0.0, -1.0], [0.0, 1.0]),
    lit([-0.5, -0.5, -0.5], [ 0.0,  0.0, -1.0], [0.0, 0.0]),

    lit([-0.5, -0.5,  0.5], [ 0.0,  0.0,  1.0], [0.0, 0.0]),
    lit([ 0.5, -0.5,  0.5], [ 0.0,  0.0,  1.0], [1.0, 0.0]),
    lit([ 0.5,  0.5,  0.5], [ 0.0,  0.0,  1.0], [1.0, 1.0]),
    lit([ 0.5,  0.5,  0.5], [ 0.0,  0.0,  1.0], [1.0, 1.0]),
    lit([-0.5,  0.5,  0.5], [ 0.0,  0.0,  1.0], [0.0, 1.0]),
    lit([-0.5, -0.5,  0.5], [ 0.0,  0.0,  1.0], [0.0, 0.0]),

    lit([-0.5,  0.5,  0.5], [-1.0,  0.0,  0.0], [1.0, 0.0]),
    lit([-0.5,  0.5, -0.5], [-1.0,  0.0,  0.0], [1.0, 1.0]),
    lit([-0.5, -0.5, -0.5], [-1.0,  0.0,  0.0], [0.0, 1.0]),
    lit([-0.5, -0.5, -0.5], [-1.0,  0.0,  0.0], [0.0, 1.0]),
    lit([-0.5, -0.5,  0.5], [-1.0,  0.0,  0.0], [0.0, 0.0]),
    lit([-0.5,  0.5,  0.5], [-1.0,  0.0,  0.0], [1.0, 0.0]),

    lit([ 0.5,  0.5,  0.5], [ 1.0,  0.0,  0.0], [1.0, 0.0]),
    lit([ 0.5,  0.5, -0.5], [ 1.0,  0.0,  0.0], [1.0, 1.0]),
    lit([ 0.5, -0.5, -0.5], [ 1.0,  0.0,  0.0], [0.0, 1.0]),
    lit([ 0.5, -0.5, -0.5], [ 1.0,  0.0,  0.0], [0.0, 1.0]),
    lit([ 0.5, -0.5,  0.5], [ 1.0,  0.0,  0.0], [0.0, 0.0]),
    lit([ 0.5,  0.5,  0.5], [ 1.0,  0.0,  0.0], [1.0, 0.0]),

    lit([-0.5, -0.5, -0.5], [ 0.0, -1.0,  0.0], [0.0, 1.0]),
    lit([ 0.5, -0.5, -0.5], [ 0.0, -1.0,  0.0], [1.0, 1.0]),
    lit([ 0.5, -0.5,  0.5], [ 0.0, -1.0,  0.0], [1.0, 0.0]),
    lit([ 0.5, -0.5,  0.5], [ 0.0, -1.0,  0.0], [1.0, 0.0]),
    lit([-0.5, -0.5,  0.5], [ 0.0, -1.0,  0.0], [0.0, 0.0]),
    lit([-0.5, -0.5, -0.5], [ 0.0, -1.0,  0.0], [0.0, 1.0]),

    lit([-0.5,  0.5, -0.5], [ 0.0,  1.0,  0.0], [0.0, 1.0]),
    lit([ 0.5,  0.5, -0.5], [ 0.0,  1.0,  0.0], [1.0, 1.0]),
    lit([ 0.5,  0.5,  0.5], [ 0.0,  1.0,  0.0], [1.0, 0.0]),
    lit([ 0.5,  0.5,  0.5], [ 0.0,  1.0,  0.0], [1.0, 0.0]),
    lit([-0.5,  0.5,  0.5], [ 0.0,  1.0,  0.0], [0.0, 0.0]),
    lit([-0.5,  0.5, -0.5], [ 0.0,  1.0,  0.0], [0.0, 1.0]),
];

/// The cube's positions only, for the light source marker and the flat-coloured demo.
pub fn cube_positions_only() -> Vec<PositionVertex> {
    CUBE.iter()
        .map(|v| PositionVertex {
            position: v.position,
        })
        .collect()
}

/// The cube with texture coordinates but no normals.
pub fn textured_cube() -> Vec<TexturedVertex> {
    CUBE.iter()
        .map(|v| TexturedVertex {
            position: v.position,
            uv: v.uv,
        })
        .collect()
}
