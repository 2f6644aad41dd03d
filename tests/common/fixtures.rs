//! Test fixtures: colour literals and their expected debug strings.

/// `(input, expected describe() output)` pairs covering every notation.
pub const DESCRIBE_CASES: &[(&str, &str)] = &[
    (
        "#ff00cc",
        "F:0 (hex), Hex: #ff00cc, Rgb: rgb(255, 0, 204), Rgba: rgba(255, 0, 204, 1.00), Srgb: color(srgb 1.000000 0.000000 0.800000)",
    ),
    (
        "#ff00cc80",
        "F:0 (hex), Hex: #ff00cc80, Rgb: rgb(255, 0, 204), Rgba: rgba(255, 0, 204, 0.50), Srgb: color(srgb 1.000000 0.000000 0.800000)",
    ),
    (
        "#ff00cc40",
        "F:0 (hex), Hex: #ff00cc40, Rgb: rgb(255, 0, 204), Rgba: rgba(255, 0, 204, 0.25), Srgb: color(srgb 1.000000 0.000000 0.800000)",
    ),
    (
        "rgb(255, 0, 204)",
        "F:1 (rgb), Hex: #ff00cc, Rgb: rgb(255, 0, 204), Rgba: rgba(255, 0, 204, 1.00), Srgb: color(srgb 1.000000 0.000000 0.800000)",
    ),
    (
        "rgb(255,0,204)",
        "F:1 (rgb), Hex: #ff00cc, Rgb: rgb(255, 0, 204), Rgba: rgba(255, 0, 204, 1.00), Srgb: color(srgb 1.000000 0.000000 0.800000)",
    ),
    (
        "rgb   (   255   ,   0   ,   204   )",
        "F:1 (rgb), Hex: #ff00cc, Rgb: rgb(255, 0, 204), Rgba: rgba(255, 0, 204, 1.00), Srgb: color(srgb 1.000000 0.000000 0.800000)",
    ),
    (
        "rgba(255, 0, 204, 1)",
        "F:2 (rgba), Hex: #ff00cc, Rgb: rgb(255, 0, 204), Rgba: rgba(255, 0, 204, 1.00), Srgb: color(srgb 1.000000 0.000000 0.800000)",
    ),
    (
        "rgba(255, 0, 204, 0.5)",
        "F:2 (rgba), Hex: #ff00cc80, Rgb: rgb(255, 0, 204), Rgba: rgba(255, 0, 204, 0.50), Srgb: color(srgb 1.000000 0.000000 0.800000)",
    ),
    (
        "rgba(255,0,204,0.5)",
        "F:2 (rgba), Hex: #ff00cc80, Rgb: rgb(255, 0, 204), Rgba: rgba(255, 0, 204, 0.50), Srgb: color(srgb 1.000000 0.000000 0.800000)",
    ),
    (
        "rgba   (   255   ,   0   ,   204   ,   0.5   )",
        "F:2 (rgba), Hex: #ff00cc80, Rgb: rgb(255, 0, 204), Rgba: rgba(255, 0, 204, 0.50), Srgb: color(srgb 1.000000 0.000000 0.800000)",
    ),
    (
        "color(srgb 1.00000 0.00000 0.80000)",
        "F:3 (srgb), Hex: #ff00cc, Rgb: rgb(255, 0, 204), Rgba: rgba(255, 0, 204, 1.00), Srgb: color(srgb 1.000000 0.000000 0.800000)",
    ),
    (
        "#ebf2ff",
        "F:0 (hex), Hex: #ebf2ff, Rgb: rgb(235, 242, 255), Rgba: rgba(235, 242, 255, 1.00), Srgb: color(srgb 0.921569 0.949020 1.000000)",
    ),
    (
        "color(srgb 0.921569 0.949020 1)",
        "F:3 (srgb), Hex: #ebf2ff, Rgb: rgb(235, 242, 255), Rgba: rgba(235, 242, 255, 1.00), Srgb: color(srgb 0.921569 0.949020 1.000000)",
    ),
    (
        "color   (   srgb   0.921569   0.949020   1   )",
        "F:3 (srgb), Hex: #ebf2ff, Rgb: rgb(235, 242, 255), Rgba: rgba(235, 242, 255, 1.00), Srgb: color(srgb 0.921569 0.949020 1.000000)",
    ),
];

/// Inputs that match no grammar.
pub const INVALID_INPUTS: &[&str] = &[
    "not-a-colour",
    "red",
    "",
    "   ",
    "rgb(1,2)",
    "rgba(1,2,3)",
    "rgb(1,2,3,4)",
    "#fff",
    "#ff00cc8",
    "ff00cc",
    "rgba(1, 2, 3, 2)",
    "rgba(1, 2, 3, 0.)",
    "color(srgb 0.5 0.5)",
    "color(srgb 2 0 0)",
    "color(display-p3 1 0 0)",
    "hsl(120, 100%, 50%)",
];
