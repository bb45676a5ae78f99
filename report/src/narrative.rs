//! Literal advisory content for the narrative sections.

use common::{Priority, Recommendation, RiskFactor, Severity};

/// Structural risk factors, in presentation order.
pub const RISK_FACTORS: [RiskFactor; 10] = [
    RiskFactor {
        factor: "OVERFITTING",
        description: "49 trades é amostra INSUFICIENTE para validação",
        severity: Severity::High,
    },
    RiskFactor {
        factor: "MUDANÇA DE REGIME",
        description: "Mercado crypto pode mudar abruptamente (bull/bear)",
        severity: Severity::High,
    },
    RiskFactor {
        factor: "VOLATILIDADE",
        description: "Aumentos podem destruir edge temporariamente",
        severity: Severity::Medium,
    },
    RiskFactor {
        factor: "SLIPPAGE",
        description: "Execution piora em mercados rápidos/voláteis",
        severity: Severity::Medium,
    },
    RiskFactor {
        factor: "FEES",
        description: "Taxas de transação NÃO contabilizadas ($0.85 líquido?)",
        severity: Severity::Medium,
    },
    RiskFactor {
        factor: "DRAWDOWN",
        description: "Máximo drawdown ainda NÃO foi testado",
        severity: Severity::High,
    },
    RiskFactor {
        factor: "LIQUIDEZ",
        description: "Size impacta execução ao escalar posições",
        severity: Severity::High,
    },
    RiskFactor {
        factor: "SHORT STRATEGY",
        description: "0% WR em 3 trades - deve ser desabilitado",
        severity: Severity::Critical,
    },
    RiskFactor {
        factor: "PSICOLÓGICO",
        description: "Sequências de perdas testam disciplina humana",
        severity: Severity::Low,
    },
    RiskFactor {
        factor: "CORRELAÇÃO",
        description: "Trades podem estar correlacionados (regime)",
        severity: Severity::Medium,
    },
];

/// Follow-up recommendations, in presentation order.
pub const RECOMMENDATIONS: [Recommendation; 10] = [
    Recommendation {
        priority: Priority::Immediate,
        action: "Coletar MAIS dados (mínimo 200-500 trades antes de escalar)",
    },
    Recommendation {
        priority: Priority::Immediate,
        action: "Desabilitar trades SHORT até revisão completa da estratégia",
    },
    Recommendation {
        priority: Priority::Immediate,
        action: "Implementar position sizing dinâmico (Half-Kelly: ~30%)",
    },
    Recommendation {
        priority: Priority::ShortTerm,
        action: "Implementar stop-loss baseado em volatilidade (ATR)",
    },
    Recommendation {
        priority: Priority::ShortTerm,
        action: "Documentar drawdown máximo e recovering time",
    },
    Recommendation {
        priority: Priority::ShortTerm,
        action: "Backtest em diferentes regimes (bull/bear/sideways)",
    },
    Recommendation {
        priority: Priority::MediumTerm,
        action: "Considerar compounding APENAS após validação robusta",
    },
    Recommendation {
        priority: Priority::MediumTerm,
        action: "Implementar trailing stop para proteger profits",
    },
    Recommendation {
        priority: Priority::LongTerm,
        action: "Diversificar estratégias para reduzir correlação",
    },
    Recommendation {
        priority: Priority::LongTerm,
        action: "Meta realista: 10-20% ao mês, não $1M",
    },
];
