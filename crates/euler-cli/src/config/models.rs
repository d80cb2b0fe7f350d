use eulerlab::engine::config::SolveConfig;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub solve_config: SolveConfig,
}
