use std::path::Path;

use importsplice::rewrite::{RewriteError, rewrite_file};
use importsplice::splice::SpliceRule;
use tracing::info;

mod logging;

/// File whose import section gets patched, relative to the project root.
const TARGET_FILE: &str = "src/app/results/[pairId]/page.tsx";

/// Import line the edit anchors on.
const ANCHOR_IMPORT: &str =
    "import { ArrowLeft, Heart, Users, TrendingUp, AlertTriangle } from 'lucide-react'";

/// The anchor line followed by the two imports the results page was missing.
const SPLICED_IMPORTS: &str = "import { ArrowLeft, Heart, Users, TrendingUp, AlertTriangle } from 'lucide-react'\nimport { ShareButtons } from '@/components/ShareButtons'\nimport { PersonalizedAdvice } from '@/components/PersonalizedAdvice'";

fn main() -> Result<(), RewriteError> {
    logging::init();

    let rule = SpliceRule::new(ANCHOR_IMPORT, SPLICED_IMPORTS);
    let outcome = rewrite_file(Path::new(TARGET_FILE), &rule)?;
    info!(occurrences = outcome.occurrences, "rewrite finished");

    println!("Imports added successfully!");
    Ok(())
}
