//! The embedded code-optimization example shown by the viewer: one sample
//! program in its original form, the annotated diff of what sloptimize
//! changed, and the optimized result. The diff text arrives pre-formed; the
//! viewer never computes one.

use crate::viewer::ExampleSources;

/// File name shown in the pane title.
pub const FILE_NAME: &str = "worker.py";

/// Extension driving syntax detection; fixed for the lifetime of the viewer.
pub const LANG_EXT: &str = "py";

/// MCP install command from the Get Started section.
pub const INSTALL_COMMAND: &str =
    "claude mcp add --transport http sloptimize https://mcp.sloptimize.ai";

pub fn sources() -> ExampleSources {
    ExampleSources {
        original: ORIGINAL.to_string(),
        diff: DIFF.to_string(),
        optimized: OPTIMIZED.to_string(),
    }
}

const ORIGINAL: &str = r#"import multiprocessing
import time
import signal
import sys
from typing import Callable, Any, Optional


class Worker:
    """A class that implements a worker process which accepts a callback function."""
    def __init__(self, target_function: Callable[[], Any], poll_interval: float = 1.0):
        self.target_function = target_function
        self.poll_interval = poll_interval
        self.worker_process: Optional[multiprocessing.Process] = None
        self.running = False

    def _worker_loop(self):
        signal.signal(signal.SIGTERM, self._signal_handler)
        signal.signal(signal.SIGINT, self._signal_handler)

        while True:
            try:
            # Call target function.
                self.target_function()
                time.sleep(self.poll_interval)
            except KeyboardInterrupt:
                break
            except Exception as e:
                # Handle exceptions in worker process.
                print(f"Error in worker process: {e}")
                time.sleep(self.poll_interval)

    def _signal_handler(self, signum, frame):
        sys.exit(0)

    def start(self):
        if self.running:
            raise RuntimeError("Worker is already running")

        # Start the worker process.
        self.worker_process = multiprocessing.Process(target=self._worker_loop)
        self.worker_process.start()
        self.running = True
        print(f"Worker process started with PID: {self.worker_process.pid}")

    def stop(self):
        if not self.running or not self.worker_process:
            return

        # Terminate the worker process gracefully.
        self.worker_process.terminate()
        self.worker_process.join(timeout=5)

        if self.worker_process.is_alive():
            self.worker_process.kill()
            self.worker_process.join()

        self.running = False
        print("Worker process stopped")

    def is_alive(self):
        return self.running and self.worker_process and self.worker_process.is_alive()


if __name__ == "__main__":
    def example_function():
        print(f"Polling at {time.strftime('%Y-%m-%d %H:%M:%S')}")

    worker = Worker(example_function, poll_interval=2.0)

    try:
        worker.start()
        time.sleep(10)
        worker.stop()
    except KeyboardInterrupt:
        worker.stop()"#;

const DIFF: &str = r#"+from typing import Any, Callable, Optional
 import multiprocessing
-import time
 import signal
 import sys
-from typing import Callable, Any, Optional
+import time


 class Worker:
-    def __init__(self, target_function: Callable[[], Any], poll_interval: float = 1.0):
-        self.target_function = target_function
+    """Manages a background process that periodically calls a provided callback function.
+
+    This class creates a separate process to run the callback in a loop, sleeping for the specified
+    poll interval between calls. It handles signals for graceful shutdown and provides methods to
+    start, stop, and check the status of the process.
+
+    Example:
+        def example_function():
+            print(f"Polling at {time.strftime('%Y-%m-%d %H:%M:%S')}")
+
+        worker = Worker(example_function, poll_interval=2.0)
+        worker.start()
+        time.sleep(10)
+        worker.stop()
+    """
+
+    process: Optional[multiprocessing.Process]
+    running: bool
+    target: Callable[[], Any]
+    poll_interval: float
+
+    def __init__(self, target: Callable[[], Any], poll_interval: float = 1.0) -> None:
+        self.target = target
         self.poll_interval = poll_interval
-        self.worker_process: Optional[multiprocessing.Process] = None
+        self.process = None
         self.running = False

-    def _worker_loop(self):
+    def _run_loop(self) -> None:
+        """Internal loop that runs in the worker process, calling the target function periodically."""
         signal.signal(signal.SIGTERM, self._signal_handler)
         signal.signal(signal.SIGINT, self._signal_handler)

         while True:
             try:
-                self.target_function()
+                self.target()
                 time.sleep(self.poll_interval)
             except KeyboardInterrupt:
                 break
             except Exception as e:
-                print(f"Error in worker process: {e}")
+                print(f"Error in process: {e}")
                 time.sleep(self.poll_interval)

-    def _signal_handler(self, signum, frame):
+    def _signal_handler(self, signum: int, frame: Any) -> None:
+        """Handles termination signals by exiting the process."""
         sys.exit(0)

-    def start(self):
+    def start(self) -> None:
+        """Starts the worker process if not already running."""
         if self.running:
             raise RuntimeError("Worker is already running")

-        self.worker_process = multiprocessing.Process(target=self._worker_loop)
-        self.worker_process.start()
+        self.process = multiprocessing.Process(target=self._run_loop)
+        self.process.start()
         self.running = True
-        print(f"Worker process started with PID: {self.worker_process.pid}")
+        print(f"Started process with PID: {self.process.pid}")

-    def stop(self):
-        if not self.running or not self.worker_process:
+    def stop(self) -> None:
+        """Stops the worker process gracefully, forcing termination if necessary."""
+        if not self.running or not self.process:
             return

-        self.worker_process.terminate()
-        self.worker_process.join(timeout=5)
+        self.process.terminate()
+        self.process.join(timeout=5)

-        if self.worker_process.is_alive():
-            self.worker_process.kill()
-            self.worker_process.join()
+        if self.process.is_alive():
+            self.process.kill()
+            self.process.join()

         self.running = False
-        print("Worker process stopped")
+        print("Process stopped")

-    def is_alive(self):
-        return self.running and self.worker_process and self.worker_process.is_alive()
+    def is_alive(self) -> bool:
+        """Checks if the worker process is running and alive."""
+        return self.running and self.process and self.process.is_alive()
-
-
-if __name__ == "__main__":
-
-    def example_function():
-        print(f"Polling at {time.strftime('%Y-%m-%d %H:%M:%S')}")
-
-    worker = Worker(example_function, poll_interval=2.0)
-
-    try:
-        worker.start()
-        time.sleep(10)
-        worker.stop()
-    except KeyboardInterrupt:
-        worker.stop()
"#;

const OPTIMIZED: &str = r#"from typing import Any, Callable, Optional
import multiprocessing
import signal
import sys
import time


class Worker:
    """Manages a background process that periodically calls a provided callback function.

    This class creates a separate process to run the callback in a loop, sleeping for the specified
    poll interval between calls. It handles signals for graceful shutdown and provides methods to
    start, stop, and check the status of the process.

    Example:
        def example_function():
            print(f"Polling at {time.strftime('%Y-%m-%d %H:%M:%S')}")

        worker = Worker(example_function, poll_interval=2.0)
        worker.start()
        time.sleep(10)
        worker.stop()
    """

    process: Optional[multiprocessing.Process]
    running: bool
    target: Callable[[], Any]
    poll_interval: float

    def __init__(self, target: Callable[[], Any], poll_interval: float = 1.0) -> None:
        self.target = target
        self.poll_interval = poll_interval
        self.process = None
        self.running = False

    def _run_loop(self) -> None:
        """Internal loop that runs in the worker process, calling the target function periodically."""
        signal.signal(signal.SIGTERM, self._signal_handler)
        signal.signal(signal.SIGINT, self._signal_handler)

        while True:
            try:
                self.target()
                time.sleep(self.poll_interval)
            except KeyboardInterrupt:
                break
            except Exception as e:
                print(f"Error in process: {e}")
                time.sleep(self.poll_interval)

    def _signal_handler(self, signum: int, frame: Any) -> None:
        """Handles termination signals by exiting the process."""
        sys.exit(0)

    def start(self) -> None:
        """Starts the worker process if not already running."""
        if self.running:
            raise RuntimeError("Worker is already running")

        self.process = multiprocessing.Process(target=self._run_loop)
        self.process.start()
        self.running = True
        print(f"Started process with PID: {self.process.pid}")

    def stop(self) -> None:
        """Stops the worker process gracefully, forcing termination if necessary."""
        if not self.running or not self.process:
            return

        self.process.terminate()
        self.process.join(timeout=5)

        if self.process.is_alive():
            self.process.kill()
            self.process.join()

        self.running = False
        print("Process stopped")

    def is_alive(self) -> bool:
        """Checks if the worker process is running and alive."""
        return self.running and self.process and self.process.is_alive()"#;
