use anyhow::Context;
use bevy::prelude::*;
use serde::Deserialize;
use std::{fs, path::Path};

#[derive(Debug, Deserialize, Clone, Copy)]
pub struct Vec2Def {
    pub x: f32,
    pub y: f32,
}
impl From<Vec2Def> for Vec2 {
    fn from(v: Vec2Def) -> Self {
        Vec2::new(v.x, v.y)
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum SlotKind {
    Good,
    Bad,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BouncerDef {
    pub pos: Vec2Def,
    pub radius: f32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SlotDef {
    pub pos: Vec2Def,
    pub kind: SlotKind,
    pub half_extents: Vec2Def,
}

/// Board placement file. Coordinates are world space (origin at window
/// center, Y up), so a 1024x768 window spans x in [-512, 512].
#[derive(Debug, Deserialize, Clone, Resource)]
pub struct BoardLayout {
    pub version: u32,
    pub bouncers: Vec<BouncerDef>,
    pub slots: Vec<SlotDef>,
}

impl BoardLayout {
    pub fn load_from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let txt = fs::read_to_string(path)
            .with_context(|| format!("read board layout {}", path.display()))?;
        let layout: BoardLayout = ron::from_str(&txt)
            .with_context(|| format!("parse board layout {}", path.display()))?;
        if layout.version != 1 {
            anyhow::bail!(
                "board layout version {} unsupported (expected 1)",
                layout.version
            );
        }
        Ok(layout)
    }

    /// Load a board file, falling back to the classic board. The error (if
    /// any) is returned alongside so the caller can log it once logging is up.
    pub fn load_or_classic(path: impl AsRef<Path>) -> (Self, Option<String>) {
        match Self::load_from_file(&path) {
            Ok(layout) => (layout, None),
            Err(e) => (Self::classic(), Some(format!("{e:#}"))),
        }
    }

    /// The classic board: five bouncers along the floor with alternating
    /// good/bad slots between them.
    pub fn classic() -> Self {
        const FLOOR_Y: f32 = -384.0;
        let bouncer = |x: f32| BouncerDef {
            pos: Vec2Def { x, y: FLOOR_Y },
            radius: 64.0,
        };
        let slot = |x: f32, kind: SlotKind| SlotDef {
            pos: Vec2Def { x, y: FLOOR_Y },
            kind,
            half_extents: Vec2Def { x: 64.0, y: 16.0 },
        };
        Self {
            version: 1,
            bouncers: vec![
                bouncer(-512.0),
                bouncer(-256.0),
                bouncer(0.0),
                bouncer(256.0),
                bouncer(512.0),
            ],
            slots: vec![
                slot(-384.0, SlotKind::Good),
                slot(-128.0, SlotKind::Bad),
                slot(128.0, SlotKind::Good),
                slot(384.0, SlotKind::Bad),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn classic_board_shape() {
        let b = BoardLayout::classic();
        assert_eq!(b.bouncers.len(), 5);
        assert_eq!(b.slots.len(), 4);
        // Slots alternate good/bad left to right.
        let kinds: Vec<SlotKind> = b.slots.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![SlotKind::Good, SlotKind::Bad, SlotKind::Good, SlotKind::Bad]
        );
        // Everything sits on the floor line.
        assert!(b.bouncers.iter().all(|bo| bo.pos.y == -384.0));
        assert!(b.slots.iter().all(|s| s.pos.y == -384.0));
    }

    #[test]
    fn parse_board_file() {
        let sample = r"(
            version: 1,
            bouncers: [
                (pos: (x: 0.0, y: -384.0), radius: 64.0),
            ],
            slots: [
                (pos: (x: 128.0, y: -384.0), kind: Good, half_extents: (x: 64.0, y: 16.0)),
                (pos: (x: -128.0, y: -384.0), kind: Bad, half_extents: (x: 64.0, y: 16.0)),
            ],
        )";
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(sample.as_bytes()).unwrap();
        let layout = BoardLayout::load_from_file(file.path()).expect("parse board");
        assert_eq!(layout.bouncers.len(), 1);
        assert_eq!(layout.slots[0].kind, SlotKind::Good);
        assert_eq!(layout.slots[1].kind, SlotKind::Bad);
    }

    #[test]
    fn unsupported_version_rejected() {
        let sample = r"(version: 2, bouncers: [], slots: [])";
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(sample.as_bytes()).unwrap();
        let err = BoardLayout::load_from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("version 2 unsupported"));
    }

    #[test]
    fn missing_file_falls_back_to_classic() {
        let (layout, err) = BoardLayout::load_or_classic("no/such/board.ron");
        assert!(err.is_some());
        assert_eq!(layout.bouncers.len(), BoardLayout::classic().bouncers.len());
    }
}
