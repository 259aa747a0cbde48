/// Built-in material swatch catalog
///
/// The high-gloss panel line is a fixed commercial catalog, so the swatches
/// ship compiled in rather than living in the backend. Folders double as the
/// category keys for the material gallery's filter.
use crate::state::data::Material;

/// Shared panel data shown in the swatch detail view
pub const PANEL_FORMAT: &str = "1.22 x 2.80 m";
pub const PANEL_CORE: &str = "18 mm";
pub const PANEL_RESISTANCE: &str = "Alta Tensión / Rayado";

pub const MATERIALS: &[Material] = &[
    // --- Color Entero ---
    Material { name: "Blanco", folder: "Color Entero", reference: "JC007", finish: "MT / HG" },
    Material { name: "Carbon", folder: "Color Entero", reference: "JC381", finish: "MT / HG" },
    Material { name: "Celeste", folder: "Color Entero", reference: "JC829", finish: "MT / HG" },
    Material { name: "Mocaccino", folder: "Color Entero", reference: "JC204", finish: "MT / HG" },
    Material { name: "Negro", folder: "Color Entero", reference: "JC006", finish: "MT / HG" },
    Material { name: "Plomo", folder: "Color Entero", reference: "JC209", finish: "MT / HG" },
    Material { name: "Rojo", folder: "Color Entero", reference: "JC010", finish: "MT / HG" },
    Material { name: "Rosado", folder: "Color Entero", reference: "JC052", finish: "MT / HG" },
    Material { name: "Taupe", folder: "Color Entero", reference: "JC858", finish: "MT / HG" },
    Material { name: "Verde", folder: "Color Entero", reference: "JC825", finish: "MT / HG" },
    // --- Mármol ---
    Material { name: "Mármol Amazonic", folder: "Mármol", reference: "JC1210", finish: "MT / HG" },
    Material { name: "Calacatta Mármol", folder: "Mármol", reference: "JC984", finish: "MT / HG" },
    Material { name: "Calacatta Negro", folder: "Mármol", reference: "JC766", finish: "MT / HG" },
    Material { name: "Calacatta White", folder: "Mármol", reference: "JC945", finish: "MT / HG" },
    Material { name: "Calacatta Exotic", folder: "Mármol", reference: "JC774", finish: "MT / HG" },
    Material { name: "Mármol Gris", folder: "Mármol", reference: "JC1184", finish: "MT / HG" },
    Material { name: "Mármol Oro", folder: "Mármol", reference: "JC1183", finish: "MT / HG" },
    Material { name: "Mármol Oscuro", folder: "Mármol", reference: "JC1008", finish: "MT / HG" },
    // --- Amaderado ---
    Material { name: "Sebra", folder: "Amaderado", reference: "JC104", finish: "MT" },
    Material { name: "Caramelo", folder: "Amaderado", reference: "JC604", finish: "MT" },
    // --- Holográfico ---
    Material { name: "Gris Holográfico", folder: "Holográfico", reference: "JC040D", finish: "MT / HG" },
    Material { name: "Blanco Holográfico", folder: "Holográfico", reference: "JC143D", finish: "MT / HG" },
    Material { name: "Beige Holográfico", folder: "Holográfico", reference: "JC857D", finish: "MT / HG" },
    Material { name: "Dorado Holográfico", folder: "Holográfico", reference: "JC332D", finish: "HG" },
    // --- Premium ---
    Material { name: "Blanco Premium", folder: "Premium", reference: "JC63004", finish: "MT / HG" },
    Material { name: "Capri Premium", folder: "Premium", reference: "JC63022", finish: "MT / HG" },
    Material { name: "Gris Premium", folder: "Premium", reference: "JC63033", finish: "MT / HG" },
];

/// Distinct folders in catalog order, for the filter dropdown.
pub fn folders() -> Vec<&'static str> {
    let mut seen = Vec::new();
    for material in MATERIALS {
        if !seen.contains(&material.folder) {
            seen.push(material.folder);
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_folders_are_distinct_and_ordered() {
        let folders = folders();
        assert_eq!(
            folders,
            vec!["Color Entero", "Mármol", "Amaderado", "Holográfico", "Premium"]
        );
    }

    #[test]
    fn test_every_swatch_has_a_reference_code() {
        for material in MATERIALS {
            assert!(material.reference.starts_with("JC"), "{}", material.name);
        }
    }
}
