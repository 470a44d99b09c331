//! Bundled translations for the console's navigation keys.

use tessera_i18n::MessageCatalog;
use tessera_state::Lang;

/// The built-in catalog for `lang`, covering every route translation key.
///
/// Embedders with their own catalogs can ignore this and supply any
/// [`tessera_i18n::Translator`].
pub fn console_catalog(lang: Lang) -> MessageCatalog {
	let entries: &[(&str, &str)] = match lang {
		Lang::Zh => &[
			("platform.home", "首页"),
			("platform.project", "项目"),
			("platform.member", "成员"),
			("platform.settings", "设置"),
			("overview", "概览"),
			("api", "接口"),
			("graphql_api", "GraphQL 接口"),
			("open_api", "开放接口"),
			("api_log", "接口日志"),
			("data", "数据"),
			("data_modeling", "数据建模"),
			("data_source", "数据源"),
			("flow", "流程"),
			("flow_definition", "流程定义"),
			("flow_instance", "流程实例"),
			("flow_instance_detail", "流程实例详情"),
			("flow_design", "流程设计"),
			("schedule", "调度"),
			("trigger.title", "触发器"),
			("job_execution_log", "任务执行日志"),
			("storage", "存储"),
			("identity_providers", "身份提供方"),
		],
		Lang::En => &[
			("platform.home", "Home"),
			("platform.project", "Projects"),
			("platform.member", "Members"),
			("platform.settings", "Settings"),
			("overview", "Overview"),
			("api", "API"),
			("graphql_api", "GraphQL API"),
			("open_api", "OpenAPI"),
			("api_log", "API Logs"),
			("data", "Data"),
			("data_modeling", "Data Modeling"),
			("data_source", "Data Sources"),
			("flow", "Flow"),
			("flow_definition", "Flow Definitions"),
			("flow_instance", "Flow Instances"),
			("flow_instance_detail", "Flow Instance Detail"),
			("flow_design", "Flow Designer"),
			("schedule", "Schedule"),
			("trigger.title", "Triggers"),
			("job_execution_log", "Job Execution Logs"),
			("storage", "Storage"),
			("identity_providers", "Identity Providers"),
		],
	};

	let mut catalog = MessageCatalog::new(match lang {
		Lang::Zh => "zh",
		Lang::En => "en",
	});
	for (key, text) in entries {
		catalog.add(*key, *text);
	}
	catalog
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::routes::{platform_routes, project_routes};
	use tessera_i18n::Translator;

	#[test]
	fn test_catalogs_cover_every_route_key() {
		for lang in [Lang::Zh, Lang::En] {
			let catalog = console_catalog(lang);
			for table in [platform_routes(), project_routes()] {
				for node in table.nodes() {
					assert!(catalog.get(node.translation_key()).is_some(), "{}", node.path());
					for child in node.children() {
						assert!(
							catalog.get(child.translation_key()).is_some(),
							"{}",
							child.path()
						);
					}
				}
			}
		}
	}

	#[test]
	fn test_locale_specific_labels() {
		assert_eq!(console_catalog(Lang::Zh).translate("data"), "数据");
		assert_eq!(console_catalog(Lang::En).translate("data"), "Data");
	}
}
