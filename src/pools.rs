//! 收益池数据
//!
//! 读取 DefiLlama 池数据，过滤垃圾池，计算稳定性评分并生成可排序表格

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::{Column, Row, Table};

/// 波动率为 null 时使用的默认值
const DEFAULT_SIGMA: f64 = 0.5;

/// 缺少 sigma 字段时按零波动处理，与显式 null 区分
fn missing_sigma() -> Option<f64> {
    Some(0.0)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pool {
    #[serde(default)]
    pub pool: String,
    #[serde(default)]
    pub chain: String,
    #[serde(default)]
    pub project: String,
    #[serde(default)]
    pub symbol: String,
    #[serde(rename = "tvlUsd", default)]
    pub tvl_usd: f64,
    #[serde(default)]
    pub apy: f64,
    #[serde(default = "missing_sigma")]
    pub sigma: Option<f64>,
    #[serde(default)]
    pub stability_score: Option<f64>,
}

/// 接口响应信封
#[derive(Debug, Deserialize)]
struct Envelope {
    status: String,
    #[serde(default)]
    data: Vec<Pool>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PoolDocument {
    Envelope(Envelope),
    Pools(Vec<Pool>),
}

/// 垃圾池过滤阈值
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolFilter {
    pub min_tvl_usd: f64,
    pub max_apy: f64,
}

impl Default for PoolFilter {
    fn default() -> Self {
        Self {
            min_tvl_usd: 1_000_000.0,
            max_apy: 1_000.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterReport {
    pub total: usize,
    pub skipped_tvl: usize,
    pub skipped_apy: usize,
    pub pools: Vec<Pool>,
}

/// 稳定性评分 = log10(TVL) / (1 + 波动率) * APY，保留两位小数
pub fn stability_score(tvl: f64, apy: f64, sigma: Option<f64>) -> f64 {
    if tvl <= 0.0 || apy <= 0.0 {
        return 0.0;
    }

    let volatility = sigma.unwrap_or(DEFAULT_SIGMA);
    let score = (tvl.log10() / (1.0 + volatility)) * apy;
    (score * 100.0).round() / 100.0
}

/// 解析 JSON（完整响应或池数组）
pub fn parse_pools(json: &str, path: &Path) -> Result<Vec<Pool>> {
    let doc: PoolDocument = serde_json::from_str(json).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })?;

    match doc {
        PoolDocument::Envelope(env) if env.status == "success" => Ok(env.data),
        PoolDocument::Envelope(env) => Err(Error::ApiStatus(env.status)),
        PoolDocument::Pools(pools) => Ok(pools),
    }
}

/// 过滤、评分并按评分降序排列
pub fn process(pools: Vec<Pool>, filter: &PoolFilter) -> FilterReport {
    let mut report = FilterReport {
        total: pools.len(),
        ..FilterReport::default()
    };

    for mut pool in pools {
        if pool.tvl_usd < filter.min_tvl_usd {
            report.skipped_tvl += 1;
            continue;
        }
        if pool.apy > filter.max_apy {
            report.skipped_apy += 1;
            continue;
        }

        pool.stability_score = Some(stability_score(pool.tvl_usd, pool.apy, pool.sigma));
        report.pools.push(pool);
    }

    report.pools.sort_by(|a, b| {
        let a = a.stability_score.unwrap_or(0.0);
        let b = b.stability_score.unwrap_or(0.0);
        b.total_cmp(&a)
    });

    tracing::info!(
        total = report.total,
        skipped_tvl = report.skipped_tvl,
        skipped_apy = report.skipped_apy,
        kept = report.pools.len(),
        "池数据过滤完成"
    );

    report
}

/// 美元金额，带 K/M/B 后缀
pub fn format_usd(value: f64) -> String {
    let abs = value.abs();
    if abs >= 1e9 {
        format!("${:.2}B", value / 1e9)
    } else if abs >= 1e6 {
        format!("${:.2}M", value / 1e6)
    } else if abs >= 1e3 {
        format!("${:.2}K", value / 1e3)
    } else {
        format!("${value:.2}")
    }
}

pub fn format_percent(value: f64) -> String {
    format!("{value:.2}%")
}

pub fn columns() -> Vec<Column> {
    vec![
        Column::new("Chain", false),
        Column::new("Project", false),
        Column::new("Symbol", false),
        Column::new("TVL", true),
        Column::new("APY", true),
        Column::new("Score", true),
    ]
}

pub fn to_row(pool: &Pool) -> Row {
    Row::new(vec![
        pool.chain.clone(),
        pool.project.clone(),
        pool.symbol.clone(),
        format_usd(pool.tvl_usd),
        format_percent(pool.apy),
        format!("{:.2}", pool.stability_score.unwrap_or(0.0)),
    ])
}

pub fn to_table(title: String, report: &FilterReport) -> Result<Table> {
    let rows = report.pools.iter().map(to_row).collect();
    Table::new(title, columns(), rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sorting::parse_value;

    fn pool(project: &str, tvl: f64, apy: f64, sigma: Option<f64>) -> Pool {
        Pool {
            pool: format!("{project}-id"),
            chain: "Ethereum".to_string(),
            project: project.to_string(),
            symbol: "USDC".to_string(),
            tvl_usd: tvl,
            apy,
            sigma,
            stability_score: None,
        }
    }

    #[test]
    fn test_stability_score() {
        assert_eq!(stability_score(0.0, 5.0, None), 0.0);
        assert_eq!(stability_score(1e6, 0.0, None), 0.0);
        // log10(1e6) = 6, 6 / 1.5 * 10 = 40
        assert_eq!(stability_score(1e6, 10.0, None), 40.0);
        // 6 / 1 * 3 = 18
        assert_eq!(stability_score(1e6, 3.0, Some(0.0)), 18.0);
        assert_eq!(stability_score(1e7, 1.0, Some(2.0)), 2.33);
    }

    #[test]
    fn test_process_filters_and_orders() {
        let pools = vec![
            pool("small", 10_000.0, 5.0, None),
            pool("spam", 5e6, 5_000.0, None),
            pool("steady", 1e9, 4.0, Some(0.1)),
            pool("hot", 2e6, 40.0, Some(1.0)),
        ];

        let report = process(pools, &PoolFilter::default());
        assert_eq!(report.total, 4);
        assert_eq!(report.skipped_tvl, 1);
        assert_eq!(report.skipped_apy, 1);

        let names: Vec<&str> = report.pools.iter().map(|p| p.project.as_str()).collect();
        assert_eq!(names, ["hot", "steady"]);
        assert!(report.pools.iter().all(|p| p.stability_score.is_some()));
    }

    #[test]
    fn test_parse_envelope_and_array() {
        let env = r#"{"status":"success","data":[{"pool":"p1","chain":"Base","project":"aero","symbol":"WETH","tvlUsd":2500000,"apy":12.5,"sigma":null}]}"#;
        let path = Path::new("yields.json");
        let pools = parse_pools(env, path).unwrap();
        assert_eq!(pools.len(), 1);
        assert_eq!(pools[0].tvl_usd, 2_500_000.0);
        assert_eq!(pools[0].sigma, None);

        let arr = r#"[{"project":"a","tvlUsd":1,"apy":2}]"#;
        assert_eq!(parse_pools(arr, path).unwrap().len(), 1);

        let bad = r#"{"status":"error","data":[]}"#;
        assert!(matches!(parse_pools(bad, path), Err(Error::ApiStatus(s)) if s == "error"));

        assert!(matches!(parse_pools("{", path), Err(Error::Json { .. })));
    }

    #[test]
    fn test_missing_sigma_differs_from_null() {
        let path = Path::new("yields.json");
        let json = r#"[
            {"project":"missing","tvlUsd":1000000,"apy":10},
            {"project":"null","tvlUsd":1000000,"apy":10,"sigma":null}
        ]"#;

        let pools = parse_pools(json, path).unwrap();
        assert_eq!(pools[0].sigma, Some(0.0));
        assert_eq!(pools[1].sigma, None);

        let report = process(pools, &PoolFilter::default());
        // 6 / 1 * 10 = 60；6 / 1.5 * 10 = 40
        assert_eq!(report.pools[0].project, "missing");
        assert_eq!(report.pools[0].stability_score, Some(60.0));
        assert_eq!(report.pools[1].stability_score, Some(40.0));
    }

    #[test]
    fn test_display_strings_normalize_back() {
        assert_eq!(format_usd(1_234_000_000.0), "$1.23B");
        assert_eq!(format_usd(2_500_000.0), "$2.50M");
        assert_eq!(format_usd(950.0), "$950.00");

        assert_eq!(parse_value(&format_usd(2_500_000.0)), 2_500_000.0);
        assert_eq!(parse_value(&format_usd(12_500.0)), 12_500.0);
        assert_eq!(parse_value(&format_percent(12.5)), 12.5);
    }

    #[test]
    fn test_to_table() {
        let report = process(vec![pool("a", 3e6, 8.0, None)], &PoolFilter::default());
        let table = to_table("Yields".to_string(), &report).unwrap();
        assert_eq!(table.width(), 6);
        assert_eq!(table.rows[0].cell(3), Some("$3.00M"));
        assert!(table.columns[3].sortable);
        assert!(!table.columns[0].sortable);
    }
}
