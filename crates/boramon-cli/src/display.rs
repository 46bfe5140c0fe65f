//! Console rendering for summaries, suggestions and the rule table.

use boramon_core::RuleSet;
use boramon_report::{KeywordSuggestion, Summary};

/// Render the headline metrics and breakdowns of a report.
pub fn render_summary(summary: &Summary) -> String {
    let mut out = String::new();

    out.push_str(&format!("Total de normas:        {}\n", summary.total));
    out.push_str(&format!("Fenómenos detectados:   {}\n", summary.detectados));
    match summary.indice_promedio {
        Some(avg) => out.push_str(&format!("Índice promedio:        {avg:.1}/10\n")),
        None => out.push_str("Índice promedio:        N/D\n"),
    }
    out.push_str(&format!("Casos de riesgo alto:   {}\n", summary.riesgo_alto));
    out.push_str(&format!("Casos a revisar:        {}\n", summary.a_revisar));

    if !summary.por_categoria.is_empty() {
        out.push_str("\nPor escenario:\n");
        for (categoria, count) in &summary.por_categoria {
            out.push_str(&format!("  {categoria:<32} {count}\n"));
        }
    }

    if !summary.por_seccion.is_empty() {
        out.push_str("\nPor sección:\n");
        for (seccion, count) in &summary.por_seccion {
            out.push_str(&format!("  {seccion:<32} {count}\n"));
        }
    }

    out.push_str("\nPor nivel de riesgo:\n");
    for (tier, count) in &summary.por_riesgo {
        out.push_str(&format!("  {:<32} {count}\n", tier.label()));
    }

    out
}

/// Render the candidate-keyword listing.
pub fn render_suggestions(suggestions: &[KeywordSuggestion]) -> String {
    if suggestions.is_empty() {
        return "Sin registros no identificados: el diccionario cubre todo.\n".to_string();
    }

    let mut out = String::new();
    out.push_str(&format!("{:<24} FRECUENCIA\n", "PALABRA"));
    for s in suggestions {
        out.push_str(&format!("{:<24} {}\n", s.palabra, s.frecuencia));
    }
    out
}

/// Render the active taxonomy, in priority order.
pub fn render_rules(rules: &RuleSet) -> String {
    let mut out = String::new();
    for (i, rule) in rules.reglas.iter().enumerate() {
        out.push_str(&format!(
            "{}. {} (peso {:.0}, {})\n",
            i + 1,
            rule.categoria,
            rule.peso,
            rule.transferencia.label()
        ));
        out.push_str(&format!("   mecanismo: {}\n", rule.mecanismo));
        out.push_str(&format!("   palabras:  {}\n", rule.palabras.join(", ")));
    }
    out.push_str(&format!(
        "\nDisparadores de auditoría: {}\n",
        rules.disparadores_auditoria.join(", ")
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use boramon_core::taxonomy;
    use boramon_report::Summary;

    #[test]
    fn summary_render_mentions_headline_fields() {
        let s = Summary::compute(&[]);
        let text = render_summary(&s);
        assert!(text.contains("Total de normas"));
        assert!(text.contains("N/D"));
    }

    #[test]
    fn rules_render_lists_every_category() {
        let rs = taxonomy::builtin();
        let text = render_rules(&rs);
        for rule in &rs.reglas {
            assert!(text.contains(&rule.categoria));
        }
        assert!(text.contains("Disparadores"));
    }

    #[test]
    fn empty_suggestions_have_friendly_message() {
        let text = render_suggestions(&[]);
        assert!(text.contains("diccionario"));
    }
}
