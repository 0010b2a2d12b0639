use crate::constants::{
    SCRAMBLE_GLYPHS, SCRAMBLE_MAX_HOLD_FRAMES, SCRAMBLE_MAX_START_FRAME,
    SCRAMBLE_RESHUFFLE_PROBABILITY,
};
use rand::prelude::*;
use smallvec::SmallVec;

/// Per-character descriptor for one scramble transition. Characters beyond
/// the shorter of the two strings have `None` on that side.
#[derive(Clone, Copy, Debug)]
pub struct ScrambleEntry {
    pub from: Option<char>,
    pub to: Option<char>,
    pub start: u32,
    pub end: u32,
    glyph: Option<char>,
}

/// What one queue entry displays on a given tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrambleCell {
    /// Original character, scrambling not started yet.
    Source(char),
    /// Randomized in-progress glyph, styled distinctly by the renderer.
    Glyph(char),
    /// Final character, settled for good.
    Target(char),
}

/// State machine that morphs one string into another over a bounded number
/// of frames. `set_text` replaces the whole queue; `tick` advances one frame
/// and reports completion.
pub struct Scrambler {
    queue: SmallVec<[ScrambleEntry; 32]>,
    frame: u32,
    complete: bool,
    rng: StdRng,
}

impl Scrambler {
    pub fn new(seed: u64) -> Self {
        Self {
            queue: SmallVec::new(),
            frame: 0,
            complete: true,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Starts a new transition from `old_text` to `new_text`, discarding any
    /// in-flight queue. The caller must cancel its tick loop before calling
    /// this (see the web layer), otherwise two writers would race on the
    /// same element.
    pub fn set_text(&mut self, old_text: &str, new_text: &str) {
        let old: Vec<char> = old_text.chars().collect();
        let new: Vec<char> = new_text.chars().collect();
        let len = old.len().max(new.len());

        self.queue.clear();
        for i in 0..len {
            let from = old.get(i).copied();
            let to = new.get(i).copied();
            let (start, end) = if from == to {
                // Nothing to morph; settle immediately with no visible scrambling.
                (0, 0)
            } else {
                let start = self.rng.gen_range(0..SCRAMBLE_MAX_START_FRAME);
                (start, start + self.rng.gen_range(0..SCRAMBLE_MAX_HOLD_FRAMES))
            };
            self.queue.push(ScrambleEntry {
                from,
                to,
                start,
                end,
                glyph: None,
            });
        }
        self.frame = 0;
        self.complete = len == 0;
    }

    /// Advances one frame, writing this tick's cells into `out`. Returns true
    /// once every entry has reached its end frame; settled characters are
    /// never re-randomized on later ticks.
    pub fn tick(&mut self, out: &mut Vec<ScrambleCell>) -> bool {
        out.clear();
        let mut settled = 0usize;
        for entry in &mut self.queue {
            if self.frame >= entry.end {
                settled += 1;
                if let Some(c) = entry.to {
                    out.push(ScrambleCell::Target(c));
                }
            } else if self.frame >= entry.start {
                let reshuffle =
                    entry.glyph.is_none() || self.rng.gen::<f32>() < SCRAMBLE_RESHUFFLE_PROBABILITY;
                if reshuffle {
                    entry.glyph = SCRAMBLE_GLYPHS.choose(&mut self.rng).copied();
                }
                if let Some(g) = entry.glyph {
                    out.push(ScrambleCell::Glyph(g));
                }
            } else if let Some(c) = entry.from {
                out.push(ScrambleCell::Source(c));
            }
        }
        if settled == self.queue.len() {
            self.complete = true;
        } else {
            self.frame += 1;
        }
        self.complete
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Upper bound on the ticks a transition can take, for callers that want
    /// to reason about convergence.
    pub fn max_ticks() -> u32 {
        SCRAMBLE_MAX_START_FRAME + SCRAMBLE_MAX_HOLD_FRAMES
    }
}

/// Renders one tick's cells as element markup, wrapping in-progress glyphs
/// in a styled span. All characters pass through `escape_html` since the
/// glyph set contains `<` and `>`.
pub fn render_html(cells: &[ScrambleCell]) -> String {
    let mut out = String::with_capacity(cells.len() * 8);
    for cell in cells {
        match cell {
            ScrambleCell::Source(c) | ScrambleCell::Target(c) => push_escaped(&mut out, *c),
            ScrambleCell::Glyph(g) => {
                out.push_str("<span class=\"scramble-glyph\">");
                push_escaped(&mut out, *g);
                out.push_str("</span>");
            }
        }
    }
    out
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        push_escaped(&mut out, c);
    }
    out
}

fn push_escaped(out: &mut String, c: char) {
    match c {
        '&' => out.push_str("&amp;"),
        '<' => out.push_str("&lt;"),
        '>' => out.push_str("&gt;"),
        '"' => out.push_str("&quot;"),
        _ => out.push(c),
    }
}
