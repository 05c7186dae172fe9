//! Schneeflocken-Builder: Basiskante → Dreieck → drei Koch-Seiten.
//!
//! Die Seiten werden immer in der Reihenfolge `P1 → P2`, `P2 → Apex`, `Apex → P1`
//! durchlaufen. Bei Bildschirmkoordinaten (+Y nach unten) und einer nach rechts
//! zeigenden Basiskante liegt der Apex oberhalb, und alle Koch-Spitzen zeigen nach außen.

use serde::{Deserialize, Serialize};

use crate::error::KochError;
use crate::geometry::{Bounds, Point, Rotation};
use crate::koch::{segment_count, subdivide, tip_rotation};
use crate::segment::{Segment, SegmentStyle};

/// Standard-Obergrenze der Rekursionstiefe (3·4^10 ≈ 3,1 Mio. Segmente).
pub const DEFAULT_MAX_DEPTH: u32 = 10;

/// Validierte, nicht-negative Rekursionstiefe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Depth(u32);

impl Depth {
    /// Tiefe aus einem vorzeichenlosen Wert.
    pub const fn new(depth: u32) -> Self {
        Self(depth)
    }

    /// Rohwert.
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Vorgänger-Tiefe (`None` bei Tiefe 0).
    pub fn previous(self) -> Option<Self> {
        self.0.checked_sub(1).map(Self)
    }
}

impl TryFrom<i64> for Depth {
    type Error = KochError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value < 0 {
            return Err(KochError::invalid(format!(
                "Tiefe muss >= 0 sein, erhalten: {value}"
            )));
        }
        // value >= 0: jede Tiefe jenseits von u32 ist ein Ressourcen-, kein Formfehler
        u32::try_from(value)
            .map(Self)
            .map_err(|_| KochError::ResourceLimit {
                depth: value.unsigned_abs(),
                max_depth: u32::MAX,
            })
    }
}

/// Regel zur Berechnung des dritten Dreieckspunkts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ApexRule {
    /// Referenzformel: waagerechte, nach rechts zeigende Basiskante
    #[default]
    HorizontalBase,
    /// Beliebig orientierte Basiskante: `P2` um -60° um `P1` gedreht
    Rotated,
}

/// Ressourcen-Grenzen für einen Build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildLimits {
    pub max_depth: u32,
}

impl BuildLimits {
    /// Validiert eine rohe Tiefe gegen diese Grenzen.
    ///
    /// Negativ → [`KochError::InvalidArgument`], oberhalb von `max_depth` (auch
    /// jenseits von `u32`) → [`KochError::ResourceLimit`].
    pub fn check_depth(&self, depth: i64) -> Result<Depth, KochError> {
        if depth > i64::from(self.max_depth) {
            return Err(KochError::ResourceLimit {
                depth: depth.unsigned_abs(),
                max_depth: self.max_depth,
            });
        }
        Depth::try_from(depth)
    }
}

impl Default for BuildLimits {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Gleichseitiges Ausgangsdreieck eines Builds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub base_start: Point,
    pub base_end: Point,
    pub apex: Point,
}

impl Triangle {
    /// Leitet das Dreieck aus der Basiskante ab und prüft die Vorbedingungen der Regel.
    pub fn from_base(base_start: Point, base_end: Point, rule: ApexRule) -> Result<Self, KochError> {
        if !base_start.is_finite() || !base_end.is_finite() {
            return Err(KochError::invalid(format!(
                "Basiskante enthält nicht-endliche Koordinaten: {base_start} → {base_end}"
            )));
        }

        if !(base_end - base_start).is_finite() {
            return Err(KochError::invalid(format!(
                "Basiskante zu lang für f64: {base_start} → {base_end}"
            )));
        }

        let apex = match rule {
            ApexRule::HorizontalBase => {
                if base_start.y != base_end.y {
                    return Err(KochError::invalid(format!(
                        "Basiskante ist nicht waagerecht (y1 = {}, y2 = {})",
                        base_start.y, base_end.y
                    )));
                }
                if base_end.x <= base_start.x {
                    return Err(KochError::invalid(format!(
                        "Basiskante muss nach rechts zeigen (x1 = {}, x2 = {})",
                        base_start.x, base_end.x
                    )));
                }
                let half_base = (base_end.x - base_start.x) / 2.0;
                let height = half_base * 60f64.to_radians().tan();
                Point::new(base_start.x + half_base, base_end.y - height)
            }
            ApexRule::Rotated => {
                if base_start == base_end {
                    return Err(KochError::invalid(format!(
                        "Basiskante hat Länge 0 bei {base_start}"
                    )));
                }
                Rotation::from_degrees(-60.0).rotate_about(base_start, base_end)
            }
        };

        let triangle = Self {
            base_start,
            base_end,
            apex,
        };
        if !apex.is_finite() || triangle.sides().iter().any(|(a, b)| !(*b - *a).is_finite()) {
            return Err(KochError::invalid(format!(
                "Dreieck mit Apex {apex} liegt außerhalb des f64-Bereichs"
            )));
        }
        Ok(triangle)
    }

    /// Die drei Seiten in fester Durchlaufreihenfolge.
    pub fn sides(&self) -> [(Point, Point); 3] {
        [
            (self.base_start, self.base_end),
            (self.base_end, self.apex),
            (self.apex, self.base_start),
        ]
    }

    /// Koch-Umriss aller drei Seiten, aneinandergehängt, mit gegebenem Stil.
    fn outline(&self, depth: u32, tip: &Rotation, style: SegmentStyle) -> Vec<Segment> {
        let mut out = Vec::with_capacity(segment_count(depth).saturating_mul(3));
        for (start, end) in self.sides() {
            out.extend(
                subdivide(start, end, depth, tip)
                    .into_iter()
                    .map(|s| s.with_style(style)),
            );
        }
        out
    }
}

/// Eingabe eines einzelnen Builds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BuildRequest {
    pub base_start: Point,
    pub base_end: Point,
    pub depth: Depth,
    pub include_previous: bool,
    pub apex_rule: ApexRule,
}

impl BuildRequest {
    /// Request ohne Vorgänger-Overlay mit der Referenz-Apex-Regel.
    pub fn new(base_start: Point, base_end: Point, depth: Depth) -> Self {
        Self {
            base_start,
            base_end,
            depth,
            include_previous: false,
            apex_rule: ApexRule::default(),
        }
    }

    /// Schaltet das Overlay der Vorgänger-Iteration.
    pub fn with_previous(mut self, include_previous: bool) -> Self {
        self.include_previous = include_previous;
        self
    }

    /// Setzt die Apex-Regel.
    pub fn with_apex_rule(mut self, apex_rule: ApexRule) -> Self {
        self.apex_rule = apex_rule;
        self
    }

    /// Baut den Umriss. Alle Prüfungen laufen vor der ersten Rekursion.
    pub fn build(&self, limits: &BuildLimits) -> Result<Outline, KochError> {
        let depth = self.depth.get();
        if depth > limits.max_depth {
            return Err(KochError::ResourceLimit {
                depth: u64::from(depth),
                max_depth: limits.max_depth,
            });
        }

        let triangle = Triangle::from_base(self.base_start, self.base_end, self.apex_rule)?;
        let tip = tip_rotation();

        let current = triangle.outline(depth, &tip, SegmentStyle::Current);
        let previous = match self.depth.previous() {
            Some(prev) if self.include_previous => {
                triangle.outline(prev.get(), &tip, SegmentStyle::Previous)
            }
            _ => Vec::new(),
        };

        // Koch-Spitzen ragen über das Dreieck hinaus und können nahe f64::MAX überlaufen
        if !current.iter().chain(&previous).all(Segment::is_finite) {
            return Err(KochError::invalid(format!(
                "Umriss um Apex {} enthält nicht-endliche Koordinaten",
                triangle.apex
            )));
        }

        log::debug!(
            "Koch-Umriss gebaut: Tiefe {}, {} aktuelle + {} vorherige Segmente, Apex {}",
            depth,
            current.len(),
            previous.len(),
            triangle.apex
        );

        Ok(Outline {
            depth: self.depth,
            triangle,
            current,
            previous,
        })
    }
}

/// Ergebnis eines Builds: aktueller Umriss und optional der Umriss der Tiefe d-1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outline {
    pub depth: Depth,
    pub triangle: Triangle,
    /// 3·4^d Segmente, Stil `Current`
    pub current: Vec<Segment>,
    /// 3·4^(d-1) Segmente, Stil `Previous`; leer ohne Overlay oder bei Tiefe 0
    pub previous: Vec<Segment>,
}

impl Outline {
    /// Alle Segmente in Zeichenreihenfolge: erst das Overlay, dann der aktuelle Umriss.
    ///
    /// Der aktuelle Umriss liegt damit oben; wo sich beide Gruppen decken, ist das
    /// Overlay verdeckt. Wer es obenauf braucht, zeichnet `current` vor `previous`.
    pub fn segments(&self) -> impl Iterator<Item = &Segment> + '_ {
        self.previous.iter().chain(self.current.iter())
    }

    /// Gesamtanzahl beider Gruppen.
    pub fn len(&self) -> usize {
        self.current.len() + self.previous.len()
    }

    /// Gibt `true` zurück, wenn keine Segmente vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Bounding-Box über alle Segment-Endpunkte.
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::from_points(self.segments().flat_map(|s| [s.start, s.end]))
    }
}

/// Baut den Koch-Umriss für eine waagerechte Basiskante.
///
/// - `depth < 0` → [`KochError::InvalidArgument`]
/// - `depth >` [`DEFAULT_MAX_DEPTH`] (beliebig groß) → [`KochError::ResourceLimit`]
/// - `base_start.y != base_end.y` oder `base_end.x <= base_start.x` → [`KochError::InvalidArgument`]
pub fn build_koch_outline(
    base_start: Point,
    base_end: Point,
    depth: i64,
    include_previous: bool,
) -> Result<Outline, KochError> {
    let limits = BuildLimits::default();
    let depth = limits.check_depth(depth)?;
    BuildRequest::new(base_start, base_end, depth)
        .with_previous(include_previous)
        .build(&limits)
}
