//! Spy Light - Light variant of the default theme

pub const THEME: &str = r##"# Spy Light theme for searchlight
# Soft paper board, same amber light

[meta]
name = "Spy Light"
version = 1
author = "searchlight"

[ui]
background = "#faf6f0"
foreground = "#5c5650"
border = "#cdc4b8"
border_focused = "#c4784a"
title = "#c4784a"
status_bar = "#c4784a"
selection_bg = "#ede6db"
selection_fg = "#3d3834"
muted = "#857c72"
border_type = "rounded"

[board]
cell = "#4a7a99"
current = "#c4944a"
found = "#6a8f4a"
readout = "#5c5650"

[chart]
linear = "#4a7a99"
binary = "#3d8a84"
axis = "#857c72"

[logs]
error = "#b85a4a"
warn = "#c4944a"
info = "#5c5650"
debug = "#7a7268"
"##;
