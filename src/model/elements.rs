// src/model/elements.rs

use crate::error::{QvError, Result};
use std::collections::HashMap;
use std::sync::OnceLock;

/// (Z, symbol, name) for every known element.
const PERIODIC_TABLE: [(u32, &str, &str); 118] = [
    // --- Period 1 ---
    (1, "H", "Hydrogen"), (2, "He", "Helium"),
    // --- Period 2 ---
    (3, "Li", "Lithium"), (4, "Be", "Beryllium"), (5, "B", "Boron"), (6, "C", "Carbon"),
    (7, "N", "Nitrogen"), (8, "O", "Oxygen"), (9, "F", "Fluorine"), (10, "Ne", "Neon"),
    // --- Period 3 ---
    (11, "Na", "Sodium"), (12, "Mg", "Magnesium"), (13, "Al", "Aluminum"), (14, "Si", "Silicon"),
    (15, "P", "Phosphorus"), (16, "S", "Sulfur"), (17, "Cl", "Chlorine"), (18, "Ar", "Argon"),
    // --- Period 4 ---
    (19, "K", "Potassium"), (20, "Ca", "Calcium"), (21, "Sc", "Scandium"), (22, "Ti", "Titanium"),
    (23, "V", "Vanadium"), (24, "Cr", "Chromium"), (25, "Mn", "Manganese"), (26, "Fe", "Iron"),
    (27, "Co", "Cobalt"), (28, "Ni", "Nickel"), (29, "Cu", "Copper"), (30, "Zn", "Zinc"),
    (31, "Ga", "Gallium"), (32, "Ge", "Germanium"), (33, "As", "Arsenic"), (34, "Se", "Selenium"),
    (35, "Br", "Bromine"), (36, "Kr", "Krypton"),
    // --- Period 5 ---
    (37, "Rb", "Rubidium"), (38, "Sr", "Strontium"), (39, "Y", "Yttrium"), (40, "Zr", "Zirconium"),
    (41, "Nb", "Niobium"), (42, "Mo", "Molybdenum"), (43, "Tc", "Technetium"), (44, "Ru", "Ruthenium"),
    (45, "Rh", "Rhodium"), (46, "Pd", "Palladium"), (47, "Ag", "Silver"), (48, "Cd", "Cadmium"),
    (49, "In", "Indium"), (50, "Sn", "Tin"), (51, "Sb", "Antimony"), (52, "Te", "Tellurium"),
    (53, "I", "Iodine"), (54, "Xe", "Xenon"),
    // --- Period 6 ---
    (55, "Cs", "Cesium"), (56, "Ba", "Barium"), (57, "La", "Lanthanum"), (58, "Ce", "Cerium"),
    (59, "Pr", "Praseodymium"), (60, "Nd", "Neodymium"), (61, "Pm", "Promethium"), (62, "Sm", "Samarium"),
    (63, "Eu", "Europium"), (64, "Gd", "Gadolinium"), (65, "Tb", "Terbium"), (66, "Dy", "Dysprosium"),
    (67, "Ho", "Holmium"), (68, "Er", "Erbium"), (69, "Tm", "Thulium"), (70, "Yb", "Ytterbium"),
    (71, "Lu", "Lutetium"), (72, "Hf", "Hafnium"), (73, "Ta", "Tantalum"), (74, "W", "Tungsten"),
    (75, "Re", "Rhenium"), (76, "Os", "Osmium"), (77, "Ir", "Iridium"), (78, "Pt", "Platinum"),
    (79, "Au", "Gold"), (80, "Hg", "Mercury"), (81, "Tl", "Thallium"), (82, "Pb", "Lead"),
    (83, "Bi", "Bismuth"), (84, "Po", "Polonium"), (85, "At", "Astatine"), (86, "Rn", "Radon"),
    // --- Period 7 ---
    (87, "Fr", "Francium"), (88, "Ra", "Radium"), (89, "Ac", "Actinium"), (90, "Th", "Thorium"),
    (91, "Pa", "Protactinium"), (92, "U", "Uranium"), (93, "Np", "Neptunium"), (94, "Pu", "Plutonium"),
    (95, "Am", "Americium"), (96, "Cm", "Curium"), (97, "Bk", "Berkelium"), (98, "Cf", "Californium"),
    (99, "Es", "Einsteinium"), (100, "Fm", "Fermium"), (101, "Md", "Mendelevium"), (102, "No", "Nobelium"),
    (103, "Lr", "Lawrencium"), (104, "Rf", "Rutherfordium"), (105, "Db", "Dubnium"), (106, "Sg", "Seaborgium"),
    (107, "Bh", "Bohrium"), (108, "Hs", "Hassium"), (109, "Mt", "Meitnerium"), (110, "Ds", "Darmstadtium"),
    (111, "Rg", "Roentgenium"), (112, "Cn", "Copernicium"), (113, "Nh", "Nihonium"), (114, "Fl", "Flerovium"),
    (115, "Mc", "Moscovium"), (116, "Lv", "Livermorium"), (117, "Ts", "Tennessine"), (118, "Og", "Oganesson"),
];

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub symbol: String,
    pub name: String,
    /// Electron count of the neutral atom
    pub electrons: u32,
}

/// Symbol -> element lookup.
#[derive(Debug, Clone, Default)]
pub struct ElementTable {
    elements: Vec<Element>,
    by_symbol: HashMap<String, usize>,
}

// Built-in table (initialized once on first use)
static EMBEDDED_TABLE: OnceLock<ElementTable> = OnceLock::new();

/// Returns the built-in 118-element table
pub fn embedded_table() -> &'static ElementTable {
    EMBEDDED_TABLE.get_or_init(|| {
        let elements = PERIODIC_TABLE
            .iter()
            .map(|&(z, symbol, name)| Element {
                symbol: symbol.to_string(),
                name: name.to_string(),
                electrons: z,
            })
            .collect();
        ElementTable::from_elements(elements)
    })
}

/// First letter upper case, the rest lower case: "fe", "FE" and " Fe " all become "Fe".
pub fn normalize_symbol(symbol: &str) -> String {
    let mut chars = symbol.trim().chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

impl ElementTable {
    /// Later duplicates of a symbol replace earlier ones.
    pub fn from_elements(elements: Vec<Element>) -> Self {
        let mut table = ElementTable::default();
        for el in elements {
            table.insert(el);
        }
        table
    }

    pub fn insert(&mut self, mut element: Element) {
        element.symbol = normalize_symbol(&element.symbol);
        match self.by_symbol.get(&element.symbol) {
            Some(&idx) => self.elements[idx] = element,
            None => {
                self.by_symbol.insert(element.symbol.clone(), self.elements.len());
                self.elements.push(element);
            }
        }
    }

    pub fn find(&self, symbol: &str) -> Result<&Element> {
        let key = normalize_symbol(symbol);
        self.by_symbol
            .get(&key)
            .map(|&idx| &self.elements[idx])
            .ok_or_else(|| QvError::NotFound(symbol.trim().to_string()))
    }

    /// Electron count of the neutral atom for `symbol`
    pub fn electrons_for(&self, symbol: &str) -> Result<u32> {
        self.find(symbol).map(|el| el.electrons)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter()
    }
}
