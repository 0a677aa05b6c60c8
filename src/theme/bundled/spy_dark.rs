//! Spy Dark - The default theme
//! Warm amber search light on a charcoal board

pub const THEME: &str = r##"# Spy Dark theme for searchlight
# Warm amber search light on a charcoal board

[meta]
name = "Spy Dark"
version = 1
author = "searchlight"

[ui]
background = "#28292d"
foreground = "#d4cfc9"
border = "#3a3b40"
border_focused = "#c9a66b"
title = "#c9a66b"
status_bar = "#c9a66b"
selection_bg = "#3d3834"
selection_fg = "#e8e4df"
muted = "#8a8279"
border_type = "rounded"

[board]
cell = "#9ca8b4"
current = "#d4a54a"
found = "#8fad5c"
readout = "#d4cfc9"

[chart]
linear = "#6b98b8"
binary = "#5da9a1"
axis = "#8a8279"

[logs]
error = "#c75f4a"
warn = "#d4a54a"
info = "#d4cfc9"
debug = "#8a8279"
"##;
