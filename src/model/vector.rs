//! Fixed-arity vectors whose components may be absent
//!
//! Both formats leave trailing components out (OBJ's optional `w`, two
//! component EMAP uvs), so a component is an `Option<f32>` rather than a
//! zero-filled float.

use std::fmt;
use std::ops::Add;

use crate::error::{Error, Result};

const COMPONENT_NAMES: [&str; 4] = ["X", "Y", "Z", "W"];

/// A vector of `N` optional single-precision components
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector<const N: usize> {
    components: [Option<f32>; N],
}

/// Two component vector
pub type Vector2f = Vector<2>;
/// Three component vector (texture coordinates, normals, brush positions)
pub type Vector3f = Vector<3>;
/// Four component vector (OBJ vertices with optional `w`)
pub type Vector4f = Vector<4>;

impl<const N: usize> Vector<N> {
    /// Create a vector with every component absent
    pub fn new() -> Self {
        Self {
            components: [None; N],
        }
    }

    /// Create a vector from explicit optional components
    pub fn from_components(components: [Option<f32>; N]) -> Self {
        Self { components }
    }

    /// Parse a separator-joined list of floats
    pub fn parse(data: &str, separator: char) -> Result<Self> {
        let mut vector = Self::new();
        vector.deserialize(data, separator)?;
        Ok(vector)
    }

    /// Component at `index`, `None` when absent or out of range
    pub fn get(&self, index: usize) -> Option<f32> {
        self.components.get(index).copied().flatten()
    }

    /// Replace the component at `index`; out-of-range indices are ignored
    pub fn set(&mut self, index: usize, value: Option<f32>) {
        if let Some(slot) = self.components.get_mut(index) {
            *slot = value;
        }
    }

    /// First component (also `u` for texture coordinates)
    pub fn x(&self) -> Option<f32> {
        self.get(0)
    }

    /// Second component (also `v` for texture coordinates)
    pub fn y(&self) -> Option<f32> {
        self.get(1)
    }

    /// Third component
    pub fn z(&self) -> Option<f32> {
        self.get(2)
    }

    /// Fourth component
    pub fn w(&self) -> Option<f32> {
        self.get(3)
    }

    /// All components in order
    pub fn components(&self) -> &[Option<f32>; N] {
        &self.components
    }

    /// True when no component is present
    pub fn is_empty(&self) -> bool {
        self.components.iter().all(Option::is_none)
    }

    /// Copy into a vector of a different arity, dropping or leaving absent the difference
    pub fn resized<const M: usize>(&self) -> Vector<M> {
        let mut resized = Vector::<M>::new();
        for (slot, value) in resized.components.iter_mut().zip(self.components.iter()) {
            *slot = *value;
        }
        resized
    }

    /// Parse `data` into this vector.
    ///
    /// Fewer tokens than `N` leave the trailing components absent. Every token is
    /// attempted before failing so the error names all invalid components; on
    /// failure `self` is left untouched.
    pub fn deserialize(&mut self, data: &str, separator: char) -> Result<()> {
        let tokens: Vec<&str> = data.split(separator).collect();

        if tokens.is_empty() || tokens.len() > N {
            return Err(Error::ParseError(format!(
                "Trying to parse invalid Vector{}f (data count is {})",
                N,
                tokens.len()
            )));
        }

        let mut parsed = [None; N];
        let mut invalid = Vec::new();

        for (i, token) in tokens.iter().enumerate() {
            match token.trim().parse::<f32>() {
                Ok(value) => parsed[i] = Some(value),
                Err(_) => invalid.push(format!(
                    "{} ('{}')",
                    COMPONENT_NAMES.get(i).copied().unwrap_or("?"),
                    token
                )),
            }
        }

        if !invalid.is_empty() {
            return Err(Error::ParseError(format!(
                "Trying to parse invalid Vector{}f ({} not a valid float)",
                N,
                invalid.join(", ")
            )));
        }

        self.components = parsed;
        Ok(())
    }

    /// Format present components joined by `separator`.
    ///
    /// Trailing absent components are dropped. An absent component that sits
    /// before a present one is written as `0` rather than an empty field. A
    /// space separated OBJ line would collapse the empty field and shift the
    /// later components down.
    pub fn serialize(&self, separator: char) -> String {
        let Some(last) = self.components.iter().rposition(Option::is_some) else {
            return String::new();
        };

        let mut out = String::new();
        for (i, component) in self.components[..=last].iter().enumerate() {
            if i != 0 {
                out.push(separator);
            }
            match component {
                Some(value) => out.push_str(&value.to_string()),
                None => out.push('0'),
            }
        }
        out
    }
}

impl<const N: usize> Default for Vector<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> From<[f32; N]> for Vector<N> {
    fn from(values: [f32; N]) -> Self {
        Self {
            components: values.map(Some),
        }
    }
}

/// Component-wise sum where an absent component adopts the other side's value
impl<const N: usize> Add for Vector<N> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        let mut sum = self;
        for (slot, rhs) in sum.components.iter_mut().zip(other.components) {
            *slot = match (*slot, rhs) {
                (Some(a), Some(b)) => Some(a + b),
                (None, b) => b,
                (a, None) => a,
            };
        }
        sum
    }
}

impl<const N: usize> fmt::Display for Vector<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize(' '))
    }
}
