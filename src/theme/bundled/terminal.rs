//! Terminal - Uses your terminal's native ANSI colors

pub const THEME: &str = r##"# Terminal theme for searchlight
# Uses your terminal's native ANSI colors - adapts to your terminal theme!
#
# This theme uses "ansi:X" syntax instead of hex colors:
# - ansi:0-7 = standard colors (black, red, green, yellow, blue, magenta, cyan, white)
# - ansi:8-15 = bright variants
# - ansi:fg = terminal's default foreground
# - ansi:bg = terminal's default background (transparent)

[meta]
name = "Terminal"
version = 1
author = "searchlight"

[ui]
background = "ansi:bg"
foreground = "ansi:fg"
border = "ansi:fg"
border_focused = "ansi:3"
title = "ansi:6"
status_bar = "ansi:fg"
selection_bg = "ansi:8"
selection_fg = "ansi:fg"

[board]
cell = "ansi:fg"
current = "ansi:3"
found = "ansi:2"
readout = "ansi:fg"

[chart]
linear = "ansi:4"
binary = "ansi:6"
axis = "ansi:8"

[logs]
error = "ansi:1"
warn = "ansi:3"
info = "ansi:fg"
debug = "ansi:8"
"##;
