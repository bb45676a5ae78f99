//! End-to-end checks of the rendered report: exact formatted lines,
//! section ordering, and determinism.

use common::TradingStats;
use report::render_report;

fn rendered() -> String {
    render_report(&TradingStats::default())
}

#[test]
fn win_rate_comparison_lines() {
    let out = rendered();

    assert!(out.contains("ANÁLISE COMPARATIVA DE PERFORMANCE vs MERCADO"));
    assert!(out.contains("Seu Bot (LONG):           81.2%"));
    assert!(out.contains("Seu Bot (SHORT):          0.0% (ATENÇÃO: Estratégia problemática)"));
}

#[test]
fn significance_lines() {
    let out = rendered();

    assert!(out.contains("Total de Trades:              49"));
    assert!(out.contains("Win Rate Observado:            81.2%"));
    assert!(out.contains("Desvio Padrão:                 ±5.6%"));
    assert!(out.contains("Intervalo de Confiança 95%:    70.3% a 92.1%"));
}

#[test]
fn loss_streak_table_rows() {
    let out = rendered();

    // A single loss is just the loss rate; ten in a row rounds to zero at
    // four decimals.
    assert!(out.contains("1 losses    |    18.8000% |              18.80x |             188.00x"));
    assert!(out.contains("2 losses    |     3.5344% |               3.53x |              35.34x"));
    assert!(out.contains("10 losses    |     0.0000% |               0.00x |               0.00x"));
}

#[test]
fn expected_worst_streaks() {
    let out = rendered();

    assert!(out.contains("  Em 100 trades:     2.8 consecutive losses"));
    assert!(out.contains("  Em 1,000 trades:   4.1 consecutive losses"));
    assert!(out.contains("  Em 10,000 trades:  5.5 consecutive losses"));
}

#[test]
fn trajectory_lines() {
    let out = rendered();

    assert!(out.contains("Capital Atual:          $1025.46"));
    assert!(out.contains("Lucro Médio/Trade:      $0.85"));
    assert!(out.contains("Trades Necessários:      1,175,264"));
    assert!(out.contains("               Trades/Dia | Anos p/ $1M |Realismo"));
    assert!(out.contains("                        1   |     3219.9 | ❌ IMPOSSÍVEL"));
    assert!(out.contains("                       50   |       64.4 | ❌ IMPOSSÍVEL"));
}

#[test]
fn edge_and_kelly_lines() {
    let out = rendered();

    assert!(out.contains("Expectativa por Trade:       $0.579"));
    assert!(out.contains("Profit Factor:                6.22"));
    assert!(out.contains("Win/Loss Ratio:              1.44"));
    assert!(out.contains("  Kelly Completo:             68.2% do capital"));
    assert!(out.contains("  Half-Kelly (Recomendado):  34.1% do capital"));
    assert!(out.contains("  Quarter-Kelly (Conservador): 17.0% do capital"));
}

#[test]
fn narrative_entries_render_with_glyphs() {
    let out = rendered();

    assert!(out.contains("🔴 8. SHORT STRATEGY       [CRÍTICO ]"));
    assert!(out.contains("📊 9. PSICOLÓGICO          [BAIXO   ]"));
    assert!(out.contains("🔴 1. [IMEDIATA]"));
    assert!(out.contains("📋 10. [LONGO PRAZO]"));
    assert!(out.contains("   Meta realista: 10-20% ao mês, não $1M"));
}

#[test]
fn sections_appear_in_fixed_order() {
    let out = rendered();

    let titles = [
        "ANÁLISE COMPARATIVA DE PERFORMANCE vs MERCADO",
        "SIGNIFICÂNCIA ESTATÍSTICA",
        "PROBABILIDADE DE SEQUÊNCIAS DE PERDAS (RISK OF RUIN)",
        "TRAJETÓRIA PARA $1 MILHÃO",
        "ANÁLISE DE RISCO DE RUIN",
        "ANÁLISE DE SUSTENTABILIDADE",
        "CONCLUSÕES E RECOMENDAÇÕES",
        "BENCHMARKS DE MERCADO - FONTES",
        "DISCLAIMER",
        "FIM DA ANÁLISE",
    ];

    let positions: Vec<usize> = titles
        .iter()
        .map(|t| out.find(t).unwrap_or_else(|| panic!("missing section: {t}")))
        .collect();

    for pair in positions.windows(2) {
        assert!(pair[0] < pair[1]);
    }
}

#[test]
fn output_is_identical_across_runs() {
    assert_eq!(rendered(), rendered());
}
