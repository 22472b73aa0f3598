//! Hand-authored vertex data for the house, in house-local units.
//! Everything here is drawn translated by [`HOUSE_OFFSET`].

use crate::render::Rgb;
use crate::render::paint::hex;

/// Where the house-local origin sits in the scene.
pub const HOUSE_OFFSET: (f64, f64) = (10.0, 100.0);

pub const SKY_TOP: Rgb = hex(0x3861A1);
pub const SKY_BOTTOM: Rgb = hex(0xBBD6EC);
pub const GROUND: Rgb = hex(0x616540);
/// Scene y where the ground starts.
pub const GROUND_Y: f64 = 220.0;

pub const WALL_LIGHT: Rgb = hex(0xCECABE);
pub const WALL_DARK: Rgb = hex(0x757170);
pub const WALL_SHADOW: Rgb = hex(0x564F47);
pub const DOOR_COLOR: Rgb = hex(0x72634E);
pub const ROOF_LIGHT: Rgb = hex(0x655B51);
pub const ROOF_DARK: Rgb = hex(0x221E1D);
pub const ROOF_MID: Rgb = hex(0x564F47);
pub const TRIM_COLOR: Rgb = hex(0xDDDDDD);
pub const CHIMNEY_LIGHT: Rgb = hex(0x9C714E);
pub const CHIMNEY_DARK: Rgb = hex(0x684A37);
pub const CHIMNEY_SHADOW: Rgb = hex(0x5E4433);
pub const FOLIAGE_GREEN: Rgb = hex(0x5C5636);
pub const FOLIAGE_DARK_GREEN: Rgb = hex(0x342812);
pub const FOLIAGE_RED: Rgb = hex(0x624233);
pub const SHUTTER_COLOR: Rgb = hex(0x4A4944);
pub const SHUTTER_WIDTH: f64 = 4.0;

/// Polygons sharing one flat colour, painted in order.
pub struct Layer {
    pub color: Rgb,
    pub polygons: &'static [&'static [(f64, f64)]],
}

pub const WALLS: &[Layer] = &[
    Layer {
        color: WALL_LIGHT,
        polygons: &[
            &[(235.0, 101.0), (176.0, 97.0), (176.0, 110.0), (235.0, 113.0)],
            &[(189.0, 123.0), (210.0, 124.0), (210.0, 142.0), (189.0, 142.0)],
            &[(189.0, 120.0), (189.0, 144.0), (141.0, 144.0), (141.0, 119.0)],
            &[(247.0, 145.0), (247.0, 121.0), (233.0, 106.0), (218.0, 120.0), (218.0, 145.0)],
        ],
    },
    Layer {
        color: WALL_DARK,
        polygons: &[
            &[(218.0, 124.0), (210.0, 124.0), (210.0, 142.0), (218.0, 144.0)],
            &[(141.0, 119.0), (113.0, 74.0), (104.0, 94.0), (103.0, 139.0), (141.0, 144.0)],
            &[(35.0, 143.0), (35.0, 117.0), (25.0, 86.0), (16.0, 118.0), (17.0, 141.0)],
            &[(151.0, 94.0), (151.0, 108.0), (141.0, 94.0)],
        ],
    },
    Layer {
        color: WALL_LIGHT,
        polygons: &[
            &[(35.0, 117.0), (116.0, 119.0), (116.0, 142.0), (35.0, 143.0)],
            &[(151.0, 108.0), (173.0, 109.0), (173.0, 95.0), (162.0, 85.0), (151.0, 94.0)],
        ],
    },
    Layer {
        color: WALL_SHADOW,
        polygons: &[
            &[(35.0, 118.0), (119.0, 121.0), (118.0, 118.0), (35.0, 116.0)],
            &[(140.0, 120.0), (189.0, 121.0), (189.0, 118.0), (140.0, 118.0)],
            &[(176.0, 99.0), (235.0, 102.0), (235.0, 99.0), (176.0, 97.0)],
            &[(232.0, 107.0), (246.0, 121.0), (250.0, 121.0), (234.0, 105.0)],
        ],
    },
];

pub const DOOR: &[Layer] = &[
    Layer {
        color: DOOR_COLOR,
        polygons: &[
            &[(210.0, 123.0), (210.0, 142.0), (203.0, 142.0), (203.0, 123.0)],
        ],
    },
];

pub const ROOF: &[Layer] = &[
    Layer {
        color: ROOF_LIGHT,
        polygons: &[
            &[(153.0, 70.0), (217.0, 74.0), (241.0, 98.0), (175.0, 95.0)],
            &[(223.0, 104.0), (234.0, 104.0), (217.0, 120.0), (189.0, 120.0), (
                189.0, 111.0), (216.0, 111.0)],
            &[(110.0, 71.0), (153.0, 74.0), (163.0, 83.0), (150.0, 94.0), (142.0, 95.0), (
                151.0, 108.0), (173.0, 108.0), (173.0, 98.0), (176.0, 98.0), (
                176.0, 101.0), (182.0, 101.0), (195.0, 118.0), (139.0, 118.0)],
            &[(23.0, 80.0), (104.0, 85.0), (102.0, 90.0), (113.0, 106.0), (114.0, 117.0), (
                32.0, 115.0)],
        ],
    },
    Layer {
        color: ROOF_DARK,
        polygons: &[
            &[(152.0, 73.0), (153.0, 70.0), (176.0, 96.0), (176.0, 100.0), (173.0, 100.0), (
                173.0, 95.0), (162.0, 84.0)],
            &[(110.0, 71.0), (113.0, 75.0), (105.0, 94.0), (100.0, 94.0)],
            &[(23.0, 79.0), (25.0, 86.0), (17.0, 117.0), (13.0, 117.0)],
            &[(138.0, 95.0), (151.0, 108.0), (142.0, 95.0)],
        ],
    },
    Layer {
        color: ROOF_MID,
        polygons: &[
            &[(163.0, 81.0), (150.0, 82.0), (138.0, 95.0), (149.0, 94.0)],
            &[(162.0, 83.0), (175.0, 96.0), (173.0, 96.0), (161.0, 84.0)],
            &[(233.0, 104.0), (223.0, 104.0), (216.0, 111.0), (217.0, 120.0)],
        ],
    },
];

pub const ROOF_TRIM: &[Layer] = &[
    Layer {
        color: TRIM_COLOR,
        polygons: &[
            &[(33.0, 115.0), (116.0, 116.0), (116.0, 120.0), (33.0, 117.0)],
            &[(175.0, 95.0), (241.0, 98.0), (241.0, 101.0), (175.0, 98.0)],
            &[(163.0, 81.0), (177.0, 94.0), (177.0, 96.0), (175.0, 96.0), (163.0, 84.0), (
                150.0, 95.0), (149.0, 93.0)],
            &[(189.0, 121.0), (218.0, 121.0), (218.0, 124.0), (189.0, 124.0)],
            &[(139.0, 116.0), (194.0, 117.0), (194.0, 119.0), (139.0, 118.0)],
            &[(234.0, 104.0), (251.0, 120.0), (251.0, 122.0), (234.0, 106.0), (
                219.0, 121.0), (217.0, 119.0)],
        ],
    },
];

pub const CHIMNEY: &[Layer] = &[
    Layer {
        color: CHIMNEY_LIGHT,
        polygons: &[
            &[(119.0, 59.0), (118.0, 120.0), (119.0, 122.0), (119.0, 142.0), (
                124.0, 142.0), (124.0, 122.0), (123.0, 120.0), (123.0, 93.0), (
                120.0, 88.0), (120.0, 83.0), (124.0, 83.0), (124.0, 61.0)],
        ],
    },
    Layer {
        color: CHIMNEY_DARK,
        polygons: &[
            &[(119.0, 142.0), (119.0, 122.0), (118.0, 120.0), (119.0, 59.0), (
                114.0, 61.0), (114.0, 120.0), (113.0, 122.0), (113.0, 142.0)],
        ],
    },
    Layer {
        color: CHIMNEY_SHADOW,
        polygons: &[
            &[(124.0, 142.0), (124.0, 122.0), (123.0, 120.0), (123.0, 93.0), (
                120.0, 88.0), (120.0, 120.0), (121.0, 122.0), (121.0, 142.0)],
        ],
    },
];

pub const FOLIAGE: &[Layer] = &[
    Layer {
        color: FOLIAGE_GREEN,
        polygons: &[
            &[(37.0, 143.0), (41.0, 138.0), (43.0, 143.0), (47.0, 139.0), (50.0, 140.0), (
                53.0, 140.0), (54.0, 143.0)],
            &[(78.0, 143.0), (76.0, 140.0), (81.0, 141.0), (82.0, 143.0)],
        ],
    },
    Layer {
        color: FOLIAGE_DARK_GREEN,
        polygons: &[
            &[(61.0, 143.0), (62.0, 140.0), (66.0, 140.0), (68.0, 143.0)],
            &[(86.0, 143.0), (89.0, 138.0), (93.0, 139.0), (96.0, 139.0), (101.0, 143.0)],
            &[(34.0, 143.0), (33.0, 139.0), (31.0, 143.0)],
            &[(158.0, 145.0), (162.0, 142.0), (163.0, 143.0), (165.0, 141.0), (
                169.0, 142.0), (173.0, 141.0), (176.0, 144.0)],
            &[(223.0, 145.0), (225.0, 142.0), (228.0, 141.0), (232.0, 143.0), (
                234.0, 144.0), (238.0, 142.0), (245.0, 145.0), (240.0, 145.0), (
                228.0, 145.0)],
        ],
    },
    Layer {
        color: FOLIAGE_RED,
        polygons: &[
            &[(103.0, 143.0), (99.0, 141.0), (96.0, 137.0), (101.0, 137.0), (
                102.0, 135.0), (106.0, 136.0), (108.0, 137.0), (110.0, 138.0), (
                112.0, 137.0), (115.0, 136.0), (116.0, 139.0), (119.0, 137.0), (
                124.0, 140.0), (121.0, 141.0), (119.0, 144.0), (113.0, 144.0), (
                110.0, 143.0), (106.0, 144.0)],
        ],
    },
];

/// Window quads, clockwise from the top-left corner.
pub const WINDOWS: [[(f64, f64); 4]; 8] = [
    [(223.0, 126.0), (242.0, 126.0), (242.0, 140.0), (223.0, 140.0)],
    [(154.0, 96.0), (169.0, 96.0), (169.0, 107.0), (154.0, 107.0)],
    [(187.0, 99.0), (206.0, 99.0), (206.0, 110.0), (187.0, 110.0)],
    [(149.0, 123.0), (164.0, 123.0), (164.0, 140.0), (149.0, 140.0)],
    [(168.0, 123.0), (181.0, 123.0), (181.0, 140.0), (168.0, 140.0)],
    [(190.0, 122.0), (202.0, 122.0), (202.0, 135.0), (190.0, 135.0)],
    [(57.0, 122.0), (71.0, 122.0), (71.0, 138.0), (57.0, 138.0)],
    [(86.0, 122.0), (100.0, 122.0), (100.0, 138.0), (86.0, 138.0)],
];
