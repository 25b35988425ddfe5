/*!
# Introductory Tutorial for Micro BASIC

Run the executable from a terminal. An optional argument names the
directory used for `LOAD`, `SAVE` and `FILES`; without one the current
directory is used. Type CTRL-D to exit, or use the `BYE` statement.
<pre><code>&nbsp;  MICRO BASIC 0.2
&nbsp;  Searching for AUTORUN.BAS...Not Found
&nbsp;  1132 bytes free.
&nbsp;  Ok
&nbsp;> █
</code></pre>

 Stop a running program with CTRL-C.

Micro BASIC is a line-numbered BASIC sized for a microcontroller with a
few kilobytes of memory. Program text, the 26 variables `A` to `Z`, and
the loop and subroutine stack all share one small block of memory. The
program is stored exactly as typed, upper-cased outside of quotes, and
is interpreted straight from that text.

Anything typed without a line number runs at once. This is direct mode.
For this tutorial, lines you type are marked with a "`>`".

<pre><code>&nbsp;> print "Hello World"
&nbsp;  Hello World
</code></pre>

Typing a line number first stores the line in the program instead. Line
numbers go from 1 to 65534. Typing a number alone deletes that line.

<pre><code>&nbsp;> 10 print "Hello World"
&nbsp;> LIST
&nbsp;  10 PRINT "Hello World"
&nbsp;  Ok
&nbsp;> RUN
&nbsp;  Hello World
&nbsp;  Ok
</code></pre>

To edit a line, type its number and press TAB. The stored text is loaded
into the input buffer.

<pre><code>&nbsp;> 10<i>{TAB}</i>
&nbsp;> 10 PRINT "Hello World"
</code></pre>

Mistakes inside a stored line are reported with the line listed and the
position of the problem marked with `^`.

<pre><code>&nbsp;> 10 print 1 2
&nbsp;> run
&nbsp;  <b>Syntax error in 10 PRINT 1 ^</b>
&nbsp;  Ok
</code></pre>

`SAVE` writes the program to a file and `LOAD` reads it back. `NEW`
erases the program in memory. A file named `AUTORUN.BAS` is loaded and
run at start-up.

<pre><code>&nbsp;> 10 print "Hello World"
&nbsp;> save hello.bas
&nbsp;  Ok
&nbsp;> new
&nbsp;> load hello.bas
&nbsp;  Ok
&nbsp;> list
&nbsp;  10 PRINT "Hello World"
&nbsp;  Ok
</code></pre>

A last example asks for a number and prints its square forever.

<pre><code>&nbsp;> 10 input a
&nbsp;> 20 print "The square of ";a;" is ";a*a
&nbsp;> 30 goto 10
&nbsp;> run
&nbsp;  ? 9
&nbsp;  The square of 9 is 81
&nbsp;  ?<i>{CTRL-C}</i>
&nbsp;  <b>Break on line 10</b>
&nbsp;  Ok
</code></pre>

The rest of this manual is reference material.

*/
