//! Built-in taxonomy: the curated scenarios of regressive income transfer
//! monitored over gazette output.
//!
//! Table order is priority order. Pension and privatisation scenarios sit
//! above the generic contract scenarios because their phrasing overlaps
//! ("prórroga", "ajuste") and the more specific reading should win.

use crate::rules::{Rule, RuleSet, TransferDirection};

/// Critical categories every curated taxonomy must keep. Regression tests
/// pin these so a careless edit cannot silently drop them.
pub const CRITICAL_CATEGORIES: &[&str] = &[
    "Jubilaciones / Pensiones",
    "Privatización / Concesión",
    "Tarifas Servicios Públicos",
];

fn rule(
    categoria: &str,
    palabras: &[&str],
    origen: &str,
    destino: &str,
    mecanismo: &str,
    peso: f64,
) -> Rule {
    Rule {
        categoria: categoria.to_string(),
        palabras: palabras.iter().map(|s| s.to_string()).collect(),
        transferencia: TransferDirection::new(origen, destino),
        mecanismo: mecanismo.to_string(),
        peso,
    }
}

/// The built-in rule table.
///
/// Keywords are written unaccented because matching runs over folded text;
/// `RuleSet::new` re-folds them anyway so an accented edit still works.
pub fn builtin() -> RuleSet {
    let reglas = vec![
        rule(
            "Jubilaciones / Pensiones",
            &[
                "movilidad jubilatoria",
                "jubilacion",
                "jubilatori",
                "haberes previsionales",
                "previsional",
                "pension",
            ],
            "Jubilados",
            "Estado",
            "Cálculo previsional discrecional",
            9.0,
        ),
        rule(
            "Tarifas Servicios Públicos",
            &[
                "cuadro tarifario",
                "revision tarifaria",
                "tarifari",
                "tarifa",
                "aumento de precio",
            ],
            "Consumidores",
            "Empresas",
            "Aumento tarifario discrecional",
            8.0,
        ),
        rule(
            "Privatización / Concesión",
            &[
                "privatizacion",
                "concesion",
                "prorroga de la concesion",
                "venta de activos",
            ],
            "Estado",
            "Empresas",
            "Privatización subvaluada",
            9.0,
        ),
        rule(
            "Obra Pública / Contratos",
            &[
                "obra publica",
                "redeterminacion de precios",
                "redeterminacion",
                "contratacion directa",
                "adjudicacion",
                "licitacion",
            ],
            "Estado",
            "Contratistas",
            "Contrato público ineficiente",
            7.0,
        ),
        rule(
            "Deuda / Fideicomisos",
            &[
                "deuda publica",
                "fideicomiso",
                "letras del tesoro",
                "emision de bonos",
                "colocacion de deuda",
            ],
            "Estado",
            "Acreedores",
            "Endeudamiento discrecional",
            6.0,
        ),
        rule(
            "Subsidios / Exenciones",
            &[
                "subsidio",
                "exencion",
                "beneficio fiscal",
                "condonacion",
            ],
            "Estado",
            "Empresas",
            "Búsqueda de rentas",
            6.0,
        ),
        rule(
            "Compensación por Devaluación",
            &[
                "compensacion por devaluacion",
                "dolarizacion de contratos",
                "clausula de ajuste cambiario",
            ],
            "Consumidores",
            "Empresas",
            "Compensación cambiaria",
            7.0,
        ),
        rule(
            "Impuestos / Traslación",
            &[
                "traslacion impositiva",
                "impuesto indirecto",
                "alicuota",
                "percepcion impositiva",
            ],
            "Consumidores",
            "Estado",
            "Traslación impositiva",
            5.0,
        ),
    ];

    let disparadores = vec![
        "millones",
        "pesos",
        "monto",
        "transferencia",
        "partida presupuestaria",
        "presupuesto",
        "fondos",
        "erogacion",
        "pago",
    ]
    .into_iter()
    .map(String::from)
    .collect();

    // The built-in table is validated like any external one; a broken edit
    // here must fail loudly at startup, not misclassify quietly.
    RuleSet::new(reglas, disparadores).expect("built-in taxonomy must validate")
}
