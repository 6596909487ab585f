// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later

use std::{env, fs, path::Path, sync::Arc};

use loghive::{
	Error, LogLevel, Logger, LoggingBuilder, LoggingContext,
	MemoryBackend,
};
use uuid::Uuid;

fn temp_dir<F>(f: F) -> std::io::Result<()>
where
	F: FnOnce(&Path) -> std::io::Result<()>,
{
	let mut path = env::temp_dir();
	path.push(format!("loghive-{}", Uuid::new_v4()));

	fs::create_dir(&path)?;
	let result = f(&path);

	let _ = fs::remove_dir_all(&path);
	result
}

fn memory_context() -> LoggingContext {
	let context = LoggingContext::new();
	context.set_named_logger_factory(|name, level| {
		Logger::new(name, level, Box::new(MemoryBackend::new()))
	});
	context
}

#[test]
fn test_end_to_end_resolution() {
	let context = memory_context();
	let result = context.load_config_str(
		"root=WARN\n\
		 app.business.*=DEBUG\n\
		 app.business.orderprocessor=TRACE\n",
	);
	assert_eq!(result.applied, 3);
	assert!(result.errors.is_empty());

	assert_eq!(
		context.get_logger("app.business.orderprocessor").level(),
		LogLevel::Trace
	);
	assert_eq!(
		context.get_logger("app.business.paymentprocessor").level(),
		LogLevel::Debug
	);
	assert_eq!(
		context.get_logger("app.ui.mainform").level(),
		LogLevel::Warn
	);
}

#[test]
fn test_freeze_at_creation_until_reset() {
	let context = memory_context();
	context.set_logger_level("worker", LogLevel::Info).unwrap();

	let logger = context.get_logger("worker");
	assert!(logger.is_info_enabled());
	assert!(!logger.is_debug_enabled());

	context.set_logger_level("worker", LogLevel::Debug).unwrap();
	// the existing handle still reports the frozen level
	assert!(!logger.is_debug_enabled());
	assert_eq!(
		context.configured_level("worker"),
		LogLevel::Debug
	);

	context.reset();
	let rebuilt = context.get_logger("worker");
	assert!(rebuilt.is_debug_enabled());
}

#[test]
fn test_chain_fan_out_with_independent_filters() {
	let context = memory_context();
	context.set_logger_level("root", LogLevel::Error).unwrap();

	let root = context.root_logger();
	let verbose_sink = Arc::new(MemoryBackend::new());
	let verbose = Arc::new(Logger::new(
		"debugstream",
		LogLevel::Trace,
		Box::new(Arc::clone(&verbose_sink)),
	));
	root.add_to_chain(Arc::clone(&verbose));
	assert_eq!(root.chain_count(), 2);

	root.debug("suppressed at the root, delivered to the delegate");
	assert_eq!(verbose_sink.len(), 1);

	// duplicate membership is silently ignored
	root.add_to_chain(Arc::clone(&verbose));
	assert_eq!(root.chain_count(), 2);

	root.clear_chain();
	assert_eq!(root.chain_count(), 1);
}

#[test]
fn test_add_logger_convenience() {
	let context = memory_context();
	let audit_sink = Arc::new(MemoryBackend::new());
	let audit = Arc::new(Logger::new(
		"audit",
		LogLevel::Trace,
		Box::new(Arc::clone(&audit_sink)),
	));
	context.add_logger("app.payments", audit);

	context.get_logger("app.payments").info("charge accepted");
	assert_eq!(audit_sink.len(), 1);
	assert_eq!(audit_sink.records()[0].logger, "app.payments");
}

#[test]
fn test_load_from_file_and_reset() -> std::io::Result<()> {
	temp_dir(|dir| {
		let path = dir.join("logging.properties");
		fs::write(
			&path,
			"# deployment overrides\n\
			 root=ERROR\n\
			 app.database.*=trace\n\
			 app.cache=BOGUS\n",
		)?;

		let context = memory_context();
		let stale = context.get_logger("app.database.pool");
		assert_eq!(stale.level(), LogLevel::Info);

		let result = context.load_config_path(&path).unwrap();
		assert_eq!(result.applied, 2);
		assert_eq!(result.errors.len(), 1);

		// cached handle is untouched until reset
		assert_eq!(stale.level(), LogLevel::Info);
		context.reset();
		assert_eq!(
			context.get_logger("app.database.pool").level(),
			LogLevel::Trace
		);
		Ok(())
	})
}

#[test]
fn test_missing_explicit_path_is_an_error() {
	let context = memory_context();
	let err = context
		.load_config_path("/no/such/dir/logging.properties")
		.unwrap_err();
	assert!(matches!(err, Error::ConfigNotFound { .. }));
}

#[test]
fn test_injected_root_receives_chain_calls() {
	let context = memory_context();
	let sink = Arc::new(MemoryBackend::new());
	let injected = Arc::new(Logger::new(
		"",
		LogLevel::Trace,
		Box::new(Arc::clone(&sink)),
	));
	context.set_logger(Arc::clone(&injected));

	let root = context.root_logger();
	assert!(Arc::ptr_eq(&root, &injected));
	root.trace("visible through the injected instance");
	assert_eq!(sink.len(), 1);
}

#[test]
fn test_builder_end_to_end() {
	let context = LoggingBuilder::new()
		.with_console_custom(false, false)
		.with_config_str("root=WARN\napp.business.*=DEBUG\n")
		.with_rule("app.business.orderprocessor", LogLevel::Trace)
		.build();

	assert_eq!(
		context.configured_level("app.business.orderprocessor"),
		LogLevel::Trace
	);
	assert_eq!(
		context.configured_level("app.business.refunds"),
		LogLevel::Debug
	);
	assert_eq!(
		context.configured_level("app.ui.mainform"),
		LogLevel::Warn
	);
}

#[test]
fn test_contexts_are_isolated() {
	let first = memory_context();
	let second = memory_context();
	first.set_logger_level("shared.name", LogLevel::Trace).unwrap();

	assert_eq!(
		first.get_logger("shared.name").level(),
		LogLevel::Trace
	);
	assert_eq!(
		second.get_logger("shared.name").level(),
		LogLevel::Info
	);
}

#[test]
fn test_concurrent_acquisition_and_reset() {
	let context = Arc::new(memory_context());
	let mut handles = Vec::new();
	for index in 0..8 {
		let context = Arc::clone(&context);
		handles.push(std::thread::spawn(move || {
			for _ in 0..100 {
				let logger = context
					.get_logger("hot.path.worker");
				logger.is_debug_enabled();
				if index == 0 {
					context.reset();
				}
			}
		}));
	}
	for handle in handles {
		handle.join().unwrap();
	}
	// the cache is either empty (reset last) or holds the one entry
	assert!(context.cached_loggers() <= 1);
}
