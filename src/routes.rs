//! The console's route declarations.
//!
//! Two tables, built once at startup: the platform-level sections shown
//! before a project is entered, and the project-scoped tree. Declaration
//! order is menu order.

use once_cell::sync::Lazy;
use tessera_routes::{IconRef, RouteNode, RouteTable};

const APPSTORE: IconRef = IconRef::new("appstore");
const USER: IconRef = IconRef::new("user");
const SETTING: IconRef = IconRef::new("setting");
const DASHBOARD: IconRef = IconRef::new("dashboard");
const API: IconRef = IconRef::new("api");
const DEPLOYMENT_UNIT: IconRef = IconRef::new("deployment-unit");
const FILE_TEXT: IconRef = IconRef::new("file-text");
const LINE_CHART: IconRef = IconRef::new("line-chart");
const CLOUD_SERVER: IconRef = IconRef::new("cloud-server");
const CONTAINER: IconRef = IconRef::new("container");
const DATABASE: IconRef = IconRef::new("database");
const NODE_INDEX: IconRef = IconRef::new("node-index");
const BRANCHES: IconRef = IconRef::new("branches");
const PLAY_CIRCLE: IconRef = IconRef::new("play-circle");
const THUNDERBOLT: IconRef = IconRef::new("thunderbolt");
const CLOUD_UPLOAD: IconRef = IconRef::new("cloud-upload");

static PLATFORM_ROUTES: Lazy<RouteTable> = Lazy::new(|| {
	RouteTable::new(vec![
		RouteNode::new("/project", APPSTORE, "platform.project"),
		RouteNode::new("/member", USER, "platform.member"),
		RouteNode::new("/settings", SETTING, "platform.settings"),
	])
	.unwrap_or_else(|e| panic!("invalid platform route table: {}", e))
});

static PROJECT_ROUTES: Lazy<RouteTable> = Lazy::new(|| {
	RouteTable::new(vec![
		RouteNode::new("/project/:projectId/", DASHBOARD, "overview"),
		RouteNode::new("/project/:projectId/api", API, "api").with_children(vec![
			RouteNode::new("/project/:projectId/api/graphql", DEPLOYMENT_UNIT, "graphql_api"),
			RouteNode::new("/project/:projectId/api/open-api", FILE_TEXT, "open_api"),
			RouteNode::new("/project/:projectId/api/log", LINE_CHART, "api_log"),
		]),
		RouteNode::new("/project/:projectId/data", CLOUD_SERVER, "data")
			.with_default_child("modeling")
			.with_children(vec![
				RouteNode::new("/project/:projectId/data/modeling", CONTAINER, "data_modeling"),
				RouteNode::new("/project/:projectId/data/source", DATABASE, "data_source"),
			]),
		RouteNode::new("/project/:projectId/flow", NODE_INDEX, "flow").with_children(vec![
			RouteNode::new("/project/:projectId/flow/definition", BRANCHES, "flow_definition"),
			RouteNode::new("/project/:projectId/flow/instance", PLAY_CIRCLE, "flow_instance"),
		]),
		RouteNode::new(
			"/project/:projectId/flow/instance/:flowInstanceId",
			PLAY_CIRCLE,
			"flow_instance_detail",
		)
		.hidden_in_menu()
		.hidden_layout(),
		RouteNode::new(
			"/project/:projectId/flow/design/:flowModuleId",
			DATABASE,
			"flow_design",
		)
		.hidden_in_menu()
		.hidden_layout(),
		RouteNode::new("/project/:projectId/schedule", THUNDERBOLT, "schedule").with_children(
			vec![
				RouteNode::new("/project/:projectId/schedule/trigger", THUNDERBOLT, "trigger.title"),
				RouteNode::new(
					"/project/:projectId/schedule/job-execution-log",
					PLAY_CIRCLE,
					"job_execution_log",
				),
			],
		),
		RouteNode::new("/project/:projectId/storage", CLOUD_UPLOAD, "storage"),
		RouteNode::new("/project/:projectId/authentication", USER, "identity_providers"),
	])
	.unwrap_or_else(|e| panic!("invalid project route table: {}", e))
});

/// The platform-level route table (project list, members, settings).
pub fn platform_routes() -> &'static RouteTable {
	&PLATFORM_ROUTES
}

/// The project-scoped route table.
pub fn project_routes() -> &'static RouteTable {
	&PROJECT_ROUTES
}
