//! Menschenlesbare Distanz-Formatierung (metrisch / imperial).

/// Fuß pro Meter.
const FEET_PER_METER: f64 = 3.28083;
/// Fuß pro Meile.
const FEET_PER_MILE: f64 = 5280.0;
/// Ab dieser Distanz (Meter) wird auf Kilometer umgeschaltet.
const KM_THRESHOLD_M: f64 = 1000.0;

/// Formatiert eine Distanz in Metern als lesbaren String.
///
/// Metrisch: unter 1000 m ganze Meter (aufgerundet), darüber Kilometer mit zwei
/// Nachkommastellen. Imperial: Fuß aufgerundet, ab einer Meile Meilen mit zwei
/// Nachkommastellen — `use_feet` erzwingt die Fuß-Darstellung auch für lange
/// Distanzen. Liefert für endliche, nicht-negative Eingaben immer einen
/// nicht-leeren String.
pub fn readable_distance(meters: f64, use_metric: bool, use_feet: bool) -> String {
    if use_metric {
        if meters >= KM_THRESHOLD_M {
            format!("{:.2} km", meters / 1000.0)
        } else {
            format!("{} m", meters.ceil() as i64)
        }
    } else {
        let feet = meters * FEET_PER_METER;
        if use_feet || feet < FEET_PER_MILE {
            format!("{} ft", feet.ceil() as i64)
        } else {
            format!("{:.2} mi", feet / FEET_PER_MILE)
        }
    }
}
