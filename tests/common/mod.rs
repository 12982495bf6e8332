//! Shared fixtures for the integration tests

#![allow(dead_code)]

use std::path::{Path, PathBuf};

/// One triangle named Box
pub const BOX_OBJ: &str = "o Box\nv 0 0 0\nv 1 0 0\nv 1 1 0\nf 1 2 3\n";

/// Two objects: a quad split into two triangles and a single triangle
///
/// Indices are global across the file, so `Tri` references 5..7.
pub const TWO_OBJECTS_OBJ: &str = "\
# two objects
o Quad
v 0 0 0
v 1 0 0
v 1 1 0
v 0 1 0
vt 0 0
vt 1 0
vt 1 1
vt 0 1
vn 0 0 1
f 1/1/1 2/2/1 3/3/1
f 1/1/1 3/3/1 4/4/1
o Tri
v 0 0 1
v 1 0 1
v 0 1 1
vt 0.5 0.5
vn 0 1 0
f 5/5/2 6/5/2 7/5/2
";

/// A document as the map editor saves it, with one brush
///
/// Lines are joined with `line_ending` so both conventions can be tested.
pub fn editor_document(line_ending: &str) -> String {
    let lines = [
        "Version_1",
        "MapProperties{",
        "mapID=4f1c",
        "mapTitle=Foundry",
        "mapDescription=Hand made",
        "mapTags=",
        "isCampaign=True",
        "mapRunes=",
        "mapWeapons=",
        "mapEnemyCount=12",
        "music=Descent",
        "}",
        "Layers{",
        "Layer{",
        "name=Geometry",
        "}",
        "}",
        "Colors{",
        "Default=1,1,1,1",
        "}",
        "Materials{",
        "Blockout",
        "}",
        "Brushes{",
        "Brush{",
        "parent=-1",
        "layer=0",
        "pos=0,4,0",
        "points=0,0,0;2,0,0;2,2,0;0,2,0",
        "edges=0,1;1,2;2,3;3,0",
        "Face{",
        "surf={",
        "localMapping=False",
        "mappingType=5",
        "seed=17",
        "}",
        "points=0;1;2;3",
        "uvs=0,0;1,0;1,1;0,1",
        "}",
        "}",
        "}",
        "Nodes{",
        "Node{",
        "type=PlayerStart",
        "pos=1,1,1",
        "}",
        "}",
    ];
    let mut text = lines.join(line_ending);
    text.push_str(line_ending);
    text
}

/// Text of the top-level block starting at `header`, up to the next top-level header
pub fn block<'a>(text: &'a str, header: &str, next: Option<&str>) -> &'a str {
    let start = text.find(header).expect("block header present");
    let end = next
        .and_then(|next| text[start..].find(next).map(|i| start + i))
        .unwrap_or(text.len());
    &text[start..end]
}

/// Write `contents` to `name` inside `dir`
pub fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("write fixture");
    path
}
